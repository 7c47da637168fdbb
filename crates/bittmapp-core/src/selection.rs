/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Selection masks
//!
//! A [`SelectionMask`] is a second packed raster with the same shape as the
//! pixels it shadows, a set bit meaning "selected". It owns its own storage
//! and is never aliased with pixel bits.
use crate::bitbuffer::BitBuffer;
use crate::errors::BitmapErrors;

/// Which sides of a selected pixel lie on the selection boundary
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Edges {
    pub north: bool,
    pub south: bool,
    pub east:  bool,
    pub west:  bool
}

impl Edges {
    /// True if no side is on the boundary
    pub const fn is_empty(&self) -> bool {
        !(self.north || self.south || self.east || self.west)
    }
}

/// Smallest axis aligned rectangle holding every selected pixel,
/// `x1`/`y1` exclusive.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Rectangle {
    pub x0: usize,
    pub y0: usize,
    pub x1: usize,
    pub y1: usize
}

impl Rectangle {
    pub const fn width(&self) -> usize {
        self.x1 - self.x0
    }

    pub const fn height(&self) -> usize {
        self.y1 - self.y0
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct SelectionMask {
    mask: BitBuffer
}

impl SelectionMask {
    /// Create an empty selection for a `width` x `height` raster
    pub fn new(width: usize, height: usize) -> Result<SelectionMask, BitmapErrors> {
        Ok(SelectionMask {
            mask: BitBuffer::new(width, height)?
        })
    }

    /// Create an empty selection shaped like `pixels`
    pub fn for_buffer(pixels: &BitBuffer) -> SelectionMask {
        // a valid buffer's shape is always valid, reuse it
        let mut mask = pixels.clone();
        mask.fill(false);

        SelectionMask { mask }
    }

    pub const fn width(&self) -> usize {
        self.mask.width()
    }

    pub const fn height(&self) -> usize {
        self.mask.height()
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        self.mask.dimensions()
    }

    /// Whether this mask can shadow `pixels`
    pub const fn matches(&self, pixels: &BitBuffer) -> bool {
        self.mask.same_shape(pixels)
    }

    /// Return an error unless this mask has the same shape as `pixels`
    pub fn ensure_matches(&self, pixels: &BitBuffer) -> Result<(), BitmapErrors> {
        if !self.matches(pixels) {
            return Err(BitmapErrors::ShapeMismatch {
                pixels:    pixels.dimensions(),
                selection: self.dimensions()
            });
        }
        Ok(())
    }

    /// Reshape to `width` x `height`, dropping the current selection
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), BitmapErrors> {
        self.mask.resize(width, height)
    }

    /// Deselect everything
    pub fn clear(&mut self) {
        self.mask.fill(false);
    }

    pub fn select_pixel(&mut self, x: usize, y: usize) -> Result<(), BitmapErrors> {
        self.mask.set_pixel(x, y)
    }

    pub fn deselect_pixel(&mut self, x: usize, y: usize) -> Result<(), BitmapErrors> {
        self.mask.clear_pixel(x, y)
    }

    /// Replace the selection with the half-open rectangle
    /// `x0 <= x < x1`, `y0 <= y < y1`.
    ///
    /// An inverted or empty rectangle leaves the selection empty. Parts of the
    /// rectangle outside the raster, including negative coordinates, are
    /// ignored.
    pub fn fill_rectangle(&mut self, x0: isize, y0: isize, x1: isize, y1: isize) {
        self.clear();

        let clamp_x = |v: isize| v.clamp(0, self.width() as isize) as usize;
        let clamp_y = |v: isize| v.clamp(0, self.height() as isize) as usize;

        let (x_start, x_end) = (clamp_x(x0), clamp_x(x1));
        let (y_start, y_end) = (clamp_y(y0), clamp_y(y1));

        for y in y_start..y_end {
            for x in x_start..x_end {
                self.mask.set_in_bounds(x, y);
            }
        }
    }

    /// Whether `(x, y)` is selected. Coordinates outside the
    /// raster are never selected.
    #[inline]
    pub fn is_selected(&self, x: usize, y: usize) -> bool {
        self.mask.is_set(x, y)
    }

    /// Same as [`is_selected`](Self::is_selected) but accepting
    /// coordinates left of or above the raster.
    #[inline]
    pub fn is_selected_signed(&self, x: isize, y: isize) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        self.is_selected(x as usize, y as usize)
    }

    /// Boundary edges of pixel `(x, y)`.
    ///
    /// A side is on the boundary when this pixel is selected and its
    /// neighbour on that side is not. Unselected pixels have no edges.
    pub fn edges(&self, x: usize, y: usize) -> Edges {
        if !self.is_selected(x, y) {
            return Edges::default();
        }
        let (x, y) = (x as isize, y as isize);

        Edges {
            north: !self.is_selected_signed(x, y - 1),
            south: !self.is_selected_signed(x, y + 1),
            east:  !self.is_selected_signed(x + 1, y),
            west:  !self.is_selected_signed(x - 1, y)
        }
    }

    /// Iterate over every selected pixel lying on the selection boundary
    /// together with its boundary edges, row by row.
    pub fn outline(&self) -> impl Iterator<Item = (usize, usize, Edges)> + '_ {
        let width = self.width();

        (0..self.height())
            .flat_map(move |y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| (x, y, self.edges(x, y)))
            .filter(|(_, _, edges)| !edges.is_empty())
    }

    /// True when nothing is selected
    pub fn is_empty(&self) -> bool {
        self.mask.as_bytes().iter().all(|x| *x == 0)
    }

    /// Number of selected pixels
    pub fn count(&self) -> usize {
        self.mask.count_set()
    }

    /// Smallest rectangle holding the selection, `None` if nothing is selected
    pub fn bounding_box(&self) -> Option<Rectangle> {
        let mut rect: Option<Rectangle> = None;

        for y in 0..self.height() {
            for x in 0..self.width() {
                if !self.is_selected(x, y) {
                    continue;
                }
                let r = rect.get_or_insert(Rectangle {
                    x0: x,
                    y0: y,
                    x1: x + 1,
                    y1: y + 1
                });
                r.x0 = r.x0.min(x);
                r.y0 = r.y0.min(y);
                r.x1 = r.x1.max(x + 1);
                r.y1 = r.y1.max(y + 1);
            }
        }
        rect
    }

    /// The underlying mask bits
    pub fn as_bitbuffer(&self) -> &BitBuffer {
        &self.mask
    }
}

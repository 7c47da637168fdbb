/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! An editable bitmap document
//!
//! A [`Document`] owns the pixels being edited and the selection
//! shadowing them, and turns logical pixel coordinates into pixel or
//! selection changes depending on the active [`Tool`].
//!
//! Coordinates are expected to already be in pixel space, mapping pointer
//! positions onto pixels is the caller's business.
use alloc::vec::Vec;

use crate::bitbuffer::BitBuffer;
use crate::errors::BitmapErrors;
use crate::log::trace;
use crate::selection::SelectionMask;

/// Editing tool applied to coordinates handed to [`Document::apply`]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Tool {
    /// Set pixels
    #[default]
    Pencil,
    /// Clear pixels
    Eraser,
    /// Drag out a rectangular selection
    Select
}

#[derive(Clone, Debug)]
pub struct Document {
    pixels:    BitBuffer,
    selection: SelectionMask,
    tool:      Tool,
    // first point of the current selection drag
    anchor:    Option<(usize, usize)>
}

impl Document {
    /// Create a blank document
    pub fn new(width: usize, height: usize) -> Result<Document, BitmapErrors> {
        Ok(Document::from_buffer(BitBuffer::new(width, height)?))
    }

    /// Create a document editing existing pixels
    pub fn from_buffer(pixels: BitBuffer) -> Document {
        let selection = SelectionMask::for_buffer(&pixels);

        Document {
            pixels,
            selection,
            tool: Tool::default(),
            anchor: None
        }
    }

    pub const fn pixels(&self) -> &BitBuffer {
        &self.pixels
    }

    pub const fn selection(&self) -> &SelectionMask {
        &self.selection
    }

    pub const fn tool(&self) -> Tool {
        self.tool
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        self.pixels.dimensions()
    }

    /// Switch tools, finishing any stroke in progress
    pub fn set_tool(&mut self, tool: Tool) {
        self.end_stroke();
        self.tool = tool;
    }

    /// Apply the active tool at `(x, y)`.
    ///
    /// Pencil and eraser fail with `OutOfBounds` outside the raster. The
    /// selection tool anchors on the first point of a stroke and selects the
    /// rectangle spanning the anchor and `(x, y)`, both corners included;
    /// any part of it outside the raster is dropped.
    pub fn apply(&mut self, x: usize, y: usize) -> Result<(), BitmapErrors> {
        match self.tool {
            Tool::Pencil | Tool::Eraser => {
                self.pixels.set_pixel_to(x, y, self.tool == Tool::Pencil)
            }
            Tool::Select => {
                let (ax, ay) = *self.anchor.get_or_insert((x, y));

                let clamp = |v: usize| v.min(isize::MAX as usize - 1) as isize;

                self.selection.fill_rectangle(
                    clamp(ax.min(x)),
                    clamp(ay.min(y)),
                    clamp(ax.max(x)) + 1,
                    clamp(ay.max(y)) + 1
                );
                Ok(())
            }
        }
    }

    /// Finish the current stroke, the next selection point starts a new rectangle
    pub fn end_stroke(&mut self) {
        self.anchor = None;
    }

    pub fn select_all(&mut self) {
        self.end_stroke();
        self.selection.fill_rectangle(
            0,
            0,
            self.pixels.width() as isize,
            self.pixels.height() as isize
        );
    }

    pub fn select_none(&mut self) {
        self.end_stroke();
        self.selection.clear();
    }

    /// Clear every selected pixel, returning how many pixels were painted before
    pub fn erase_selection(&mut self) -> Result<usize, BitmapErrors> {
        self.selection.ensure_matches(&self.pixels)?;

        let mut erased = 0;

        for y in 0..self.pixels.height() {
            for x in 0..self.pixels.width() {
                if self.selection.is_selected(x, y) && self.pixels.is_set(x, y) {
                    self.pixels.clear_pixel(x, y)?;
                    erased += 1;
                }
            }
        }
        trace!("Erased {} selected pixels", erased);
        Ok(erased)
    }

    /// Give the document a new shape. Existing content is discarded.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), BitmapErrors> {
        let pixels = BitBuffer::new(width, height)?;
        trace!("Resizing document to {}x{}", width, height);
        self.load(pixels);
        Ok(())
    }

    /// Replace the pixels, the selection is reset to match the new shape
    pub fn load(&mut self, pixels: BitBuffer) {
        self.selection = SelectionMask::for_buffer(&pixels);
        self.pixels = pixels;
        self.anchor = None;
    }

    /// Load a headerless packed dump whose dimensions were supplied
    /// by the user
    pub fn load_raw(&mut self, bytes: Vec<u8>, width: usize, height: usize) -> Result<(), BitmapErrors> {
        let pixels = BitBuffer::from_raw(bytes, width, height)?;
        self.load(pixels);
        Ok(())
    }

    /// Consume the document returning its pixels
    pub fn into_pixels(self) -> BitBuffer {
        self.pixels
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use crate::document::{Document, Tool};

    #[test]
    fn pencil_and_eraser() {
        let mut doc = Document::new(8, 8).unwrap();

        doc.apply(1, 1).unwrap();
        doc.apply(2, 1).unwrap();
        assert_eq!(doc.pixels().count_set(), 2);

        doc.set_tool(Tool::Eraser);
        doc.apply(1, 1).unwrap();
        assert!(!doc.pixels().is_set(1, 1));
        assert!(doc.pixels().is_set(2, 1));

        assert!(doc.apply(8, 0).unwrap_err().is_out_of_bounds());
    }

    #[test]
    fn selection_drag_spans_anchor() {
        let mut doc = Document::new(16, 8).unwrap();
        doc.set_tool(Tool::Select);

        doc.apply(5, 4).unwrap();
        doc.apply(2, 1).unwrap();
        // corners inclusive: 4 columns x 4 rows
        assert_eq!(doc.selection().count(), 16);
        assert!(doc.selection().is_selected(5, 4));
        assert!(doc.selection().is_selected(2, 1));

        // dragging off the raster clips
        doc.apply(100, 100).unwrap();
        assert_eq!(doc.selection().count(), (16 - 5) * (8 - 4));

        doc.end_stroke();
        doc.apply(0, 0).unwrap();
        assert_eq!(doc.selection().count(), 1);
    }

    #[test]
    fn erase_selection_only_touches_selected() {
        let mut doc = Document::new(8, 2).unwrap();
        doc.apply(0, 0).unwrap();
        doc.apply(7, 1).unwrap();
        doc.apply(3, 0).unwrap();

        doc.set_tool(Tool::Select);
        doc.apply(0, 0).unwrap();
        doc.apply(3, 0).unwrap();

        assert_eq!(doc.erase_selection(), Ok(2));
        assert_eq!(doc.pixels().count_set(), 1);
        assert!(doc.pixels().is_set(7, 1));
    }

    #[test]
    fn load_resets_selection_shape() {
        let mut doc = Document::new(8, 8).unwrap();
        doc.select_all();
        assert_eq!(doc.selection().count(), 64);

        doc.load_raw(vec![0xFF; 4], 16, 2).unwrap();
        assert_eq!(doc.dimensions(), (16, 2));
        assert!(doc.selection().matches(doc.pixels()));
        assert!(doc.selection().is_empty());

        assert!(doc.load_raw(vec![0; 3], 16, 2).is_err());
        assert_eq!(doc.dimensions(), (16, 2));

        doc.resize(8, 1).unwrap();
        assert_eq!(doc.pixels().count_set(), 0);
        assert_eq!(doc.selection().dimensions(), (8, 1));
    }
}

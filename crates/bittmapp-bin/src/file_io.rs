/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsStr;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use log::debug;

use crate::workflow::WorkflowErrors;

/// Read a whole file into memory
pub fn read_file(file_path: &OsStr) -> Result<Vec<u8>, WorkflowErrors> {
    let mut fd = File::open(file_path)?;
    let mut buf = Vec::with_capacity(1 << 12);

    fd.read_to_end(&mut buf)?;
    debug!("Read {} bytes from {:?}", buf.len(), file_path);

    Ok(buf)
}

/// Write `data` to `file_path`, refusing to clobber an existing file
/// unless `override_files` is set
pub fn write_file(
    file_path: &OsStr, data: &[u8], override_files: bool
) -> Result<(), WorkflowErrors> {
    if Path::new(file_path).exists() && !override_files {
        return Err(WorkflowErrors::GenericString(format!(
            "File {file_path:?} already exists, pass -y to overwrite it"
        )));
    }
    let file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(file_path)?;

    let mut writer = BufWriter::new(file);
    writer.write_all(data)?;
    writer.flush()?;

    debug!("Wrote {} bytes to {:?}", data.len(), file_path);
    Ok(())
}

//! Walking the mipmap chain stored in a texture body.
//!
//! The body is a plain concatenation of levels, one index byte per pixel.
//! Level `n + 1` has half the width and height of level `n` (rounded down)
//! and starts right after it, so the only way to find a level is to sum
//! the pixel counts of every level before it.
//!
//! The chain ends when the body is exhausted or when a dimension reaches
//! zero. The second condition matters: a zero-sized level would not move
//! the offset forward and an unbounded walk looking for a missing level
//! would never finish.

use crate::parser::error::Error;
use crate::parser::types::ParseResult;
use log::*;
use std::iter::FusedIterator;

/// Position and size of one mipmap level inside the texture body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MipLevel {
    /// Level number, 0 is the full resolution image
    pub id: usize,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Offset of the first pixel index, relative to the body
    pub offset: usize,
}

impl MipLevel {
    /// Number of pixel indices in the level
    pub fn pixel_count(&self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }

    /// Offset right past the last pixel index of the level
    pub fn end(&self) -> usize {
        self.offset.saturating_add(self.pixel_count())
    }

    /// Whether the whole level is stored in a body of `body_len` bytes
    pub fn fits(&self, body_len: usize) -> bool {
        self.end() <= body_len
    }

    fn next_level(&self) -> Self {
        Self {
            id: self.id + 1,
            width: self.width / 2,
            height: self.height / 2,
            offset: self.end(),
        }
    }
}

/// Iterator over the mipmap levels of a texture body.
///
/// Yields every level that starts inside the body. The last yielded level
/// may extend past the end of the body, check it with [`MipLevel::fits`].
#[derive(Debug, Clone)]
pub struct MipChain {
    body_len: usize,
    next: Option<MipLevel>,
}

impl MipChain {
    /// Start a walk over a body of `body_len` bytes from the base dimensions
    pub fn new(body_len: usize, width: u32, height: u32) -> Self {
        Self {
            body_len,
            next: Some(MipLevel {
                id: 0,
                width,
                height,
                offset: 0,
            }),
        }
    }
}

impl Iterator for MipChain {
    type Item = MipLevel;

    fn next(&mut self) -> Option<MipLevel> {
        let level = self.next.take()?;
        if level.offset >= self.body_len || level.pixel_count() == 0 {
            return None;
        }
        self.next = Some(level.next_level());
        Some(level)
    }
}

impl FusedIterator for MipChain {}

/// Pixel indices of a located mipmap level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocatedLevel<'a> {
    /// Level geometry
    pub level: MipLevel,
    /// One palette index per pixel, `width * height` entries in row-major order
    pub indices: &'a [u8],
}

impl LocatedLevel<'_> {
    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.level.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.level.height
    }
}

/// Find the pixel indices of level `target` in a texture body.
///
/// Fails with [`Error::LevelNotFound`] when the chain ends before
/// `target` or when the target level is only partially stored.
pub fn locate_level(
    body: &[u8],
    width: u32,
    height: u32,
    target: usize,
) -> ParseResult<LocatedLevel<'_>> {
    let mut available = 0;
    for level in MipChain::new(body.len(), width, height) {
        let fits = level.fits(body.len());
        if level.id == target {
            if !fits {
                error!(
                    "Mipmap {} needs bytes {}..{} but the body has only {}",
                    level.id,
                    level.offset,
                    level.end(),
                    body.len()
                );
                break;
            }
            trace!(
                "Located mipmap {} ({}x{}) at body offset {}",
                level.id, level.width, level.height, level.offset
            );
            return Ok(LocatedLevel {
                level,
                indices: &body[level.offset..level.end()],
            });
        }
        if fits {
            available = level.id + 1;
        }
    }
    Err(Error::LevelNotFound {
        level: target,
        available,
    })
}

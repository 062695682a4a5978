use super::{Error, Result};
use crate::types::PixelGrid;
use log::*;

/// Reshape a flat color sequence into a row-major pixel grid.
///
/// Pixel `(row, col)` takes `colors[row * width + col]`. Every color must
/// have exactly `channels` values and there must be exactly
/// `width * height` colors, otherwise the grid is not built.
pub fn assemble<C>(colors: &[C], width: u32, height: u32, channels: usize) -> Result<PixelGrid>
where
    C: AsRef<[u8]>,
{
    if channels == 0 {
        return Err(Error::UnsupportedChannelCount(channels));
    }
    let expected = (width as usize).saturating_mul(height as usize);
    if colors.len() != expected {
        error!(
            "Image of {width}x{height} needs {expected} colors, {} given",
            colors.len()
        );
        return Err(Error::ShapeMismatch {
            expected,
            actual: colors.len(),
        });
    }

    if let Some((index, color)) = colors
        .iter()
        .enumerate()
        .find(|(_, color)| color.as_ref().len() != channels)
    {
        return Err(Error::ChannelMismatch {
            index,
            expected: channels,
            actual: color.as_ref().len(),
        });
    }

    let capacity = expected
        .checked_mul(channels)
        .ok_or(Error::UnsupportedChannelCount(channels))?;
    let mut data = Vec::with_capacity(capacity);
    for color in colors {
        data.extend_from_slice(color.as_ref());
    }

    Ok(PixelGrid::from_raw_parts(width, height, channels, data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_row_major_layout() {
        let colors: Vec<[u8; 3]> = (0..6).map(|i| [i, i * 10, i * 20]).collect();
        let grid = assemble(&colors, 3, 2, 3).unwrap();

        assert_eq!(grid.shape(), (2, 3, 3));
        for row in 0..2 {
            for col in 0..3 {
                assert_eq!(grid.pixel(row, col).unwrap(), &colors[row * 3 + col]);
            }
        }
    }

    #[test]
    fn test_flatten_round_trip() {
        let colors: Vec<Vec<u8>> = (0..20u8).map(|i| vec![i, 255 - i, i / 2, 7]).collect();
        let grid = assemble(&colors, 5, 4, 4).unwrap();
        let flattened: Vec<Vec<u8>> = grid.pixels().map(<[u8]>::to_vec).collect();
        assert_eq!(flattened, colors);
    }

    #[test]
    fn test_shape_mismatch() {
        let colors = vec![[0u8; 3]; 5];
        assert!(matches!(
            assemble(&colors, 2, 2, 3),
            Err(Error::ShapeMismatch {
                expected: 4,
                actual: 5
            })
        ));
        assert!(matches!(
            assemble(&colors[..3], 2, 2, 3),
            Err(Error::ShapeMismatch {
                expected: 4,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_channel_mismatch() {
        let colors: Vec<&[u8]> = vec![&[1, 2, 3], &[1, 2, 3, 4]];
        assert!(matches!(
            assemble(&colors, 2, 1, 3),
            Err(Error::ChannelMismatch {
                index: 1,
                expected: 3,
                actual: 4
            })
        ));
    }

    #[test]
    fn test_zero_channels() {
        let colors: Vec<&[u8]> = vec![&[]];
        assert!(matches!(
            assemble(&colors, 1, 1, 0),
            Err(Error::UnsupportedChannelCount(0))
        ));
    }

    #[test]
    fn test_huge_channel_count_is_an_error() {
        let channels = usize::MAX / 2 + 1;
        let colors = vec![[0u8; 3]; 2];
        assert!(matches!(
            assemble(&colors, 2, 1, channels),
            Err(Error::ChannelMismatch { index: 0, .. })
        ));
    }
}

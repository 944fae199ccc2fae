//! Read-only, bounds-checked access to the RGBA texture.

/// Borrowed view of a world's texture.
///
/// The view borrows the world, so it cannot outlive it. `as_ptr` and `len`
/// describe the same allocation a C host reads through `sa_buffer_view`.
#[derive(Clone, Copy, Debug)]
pub struct TextureView<'a> {
    bytes: &'a [u8],
    width: usize,
    height: usize,
}

impl<'a> TextureView<'a> {
    pub(crate) fn new(bytes: &'a [u8], width: usize, height: usize) -> Self {
        debug_assert_eq!(bytes.len(), width * height * 4);
        TextureView {
            bytes,
            width,
            height,
        }
    }

    pub fn as_ptr(&self) -> *const u8 {
        self.bytes.as_ptr()
    }

    /// Always `width * height * 4`.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.width * 4
    }

    /// RGBA of one pixel, or `None` out of range.
    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        let row = self.row(y)?;
        let x = usize::try_from(x).ok().filter(|&x| x < self.width)?;
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&row[x * 4..x * 4 + 4]);
        Some(rgba)
    }

    /// One row of pixels, or `None` out of range.
    pub fn row(&self, y: i32) -> Option<&'a [u8]> {
        let y = usize::try_from(y).ok().filter(|&y| y < self.height)?;
        let stride = self.stride();
        Some(&self.bytes[y * stride..(y + 1) * stride])
    }

    /// Copy the whole texture into `out`. Returns bytes written, 0 if `out` is too small.
    pub fn copy_to(&self, out: &mut [u8]) -> usize {
        if out.len() < self.bytes.len() {
            return 0;
        }
        out[..self.bytes.len()].copy_from_slice(self.bytes);
        self.bytes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<u8> {
        // 2x2, each pixel filled with its index
        (0u8..4).flat_map(|i| [i; 4]).collect()
    }

    #[test]
    fn test_pixel_and_row() {
        let bytes = sample();
        let view = TextureView::new(&bytes, 2, 2);

        assert_eq!(view.len(), 16);
        assert_eq!(view.stride(), 8);
        assert_eq!(view.pixel(0, 0), Some([0; 4]));
        assert_eq!(view.pixel(1, 0), Some([1; 4]));
        assert_eq!(view.pixel(0, 1), Some([2; 4]));
        assert_eq!(view.pixel(1, 1), Some([3; 4]));
        assert_eq!(view.row(1), Some(&bytes[8..16]));
    }

    #[test]
    fn test_out_of_range_reads() {
        let bytes = sample();
        let view = TextureView::new(&bytes, 2, 2);

        assert_eq!(view.pixel(-1, 0), None);
        assert_eq!(view.pixel(2, 0), None);
        assert_eq!(view.pixel(0, 2), None);
        assert_eq!(view.pixel(0, -1), None);
        assert_eq!(view.row(2), None);
        assert_eq!(view.row(i32::MIN), None);
    }

    #[test]
    fn test_copy_to() {
        let bytes = sample();
        let view = TextureView::new(&bytes, 2, 2);

        let mut small = [0u8; 15];
        assert_eq!(view.copy_to(&mut small), 0);
        assert!(small.iter().all(|&b| b == 0));

        let mut out = [0xAAu8; 20];
        assert_eq!(view.copy_to(&mut out), 16);
        assert_eq!(&out[..16], &bytes[..]);
        assert_eq!(&out[16..], &[0xAA; 4]);
    }
}

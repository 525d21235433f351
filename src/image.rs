use crate::*;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const PPM_MAX_COLOR: u32 = 255;

/// Pixel buffer addressed by (x = column, y = row), row 0 at the top.
#[derive(Clone, Debug)]
pub struct Image {
    w: u32,
    h: u32,
    buf: Vec<RGB>,
}

fn scale_channel(c: f64, max: u32) -> u32 {
    let c = if c.is_nan() { 0.0 } else { c.max(0.0).min(1.0) };
    (c * max as f64).floor() as u32
}

impl Image {
    pub fn new(w: u32, h: u32) -> Self {
        let mut buf = Vec::new();
        buf.resize((w * h) as usize, RGB::black());
        Image { w, h, buf }
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.w && y < self.h,
            "pixel ({}, {}) out of {}x{} image",
            x,
            y,
            self.w,
            self.h
        );
        (y * self.w + x) as usize
    }

    pub fn at(&self, x: u32, y: u32) -> &RGB {
        &self.buf[self.offset(x, y)]
    }

    pub fn at_mut(&mut self, x: u32, y: u32) -> &mut RGB {
        let i = self.offset(x, y);
        &mut self.buf[i]
    }

    pub fn w(&self) -> u32 {
        self.w
    }
    pub fn h(&self) -> u32 {
        self.h
    }

    /// Plain (P3) PPM, one pixel per line. Channels are clamped to [0, 1] and
    /// scaled by `floor(c * 255)`.
    pub fn write_ppm<W: Write>(&self, out: &mut W) -> Result<()> {
        write!(out, "P3\n{} {}\n{}\n", self.w, self.h, PPM_MAX_COLOR)?;
        for c in self.buf.iter() {
            writeln!(
                out,
                "{} {} {}",
                scale_channel(c.r, PPM_MAX_COLOR),
                scale_channel(c.g, PPM_MAX_COLOR),
                scale_channel(c.b, PPM_MAX_COLOR)
            )?;
        }
        Ok(())
    }

    pub fn save_ppm<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }
        let mut file = BufWriter::new(std::fs::File::create(path)?);
        self.write_ppm(&mut file)?;
        file.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_black() {
        let image = Image::new(10, 20);
        assert_eq!((image.w(), image.h()), (10, 20));
        for y in 0..20 {
            for x in 0..10 {
                assert_eq!(*image.at(x, y), RGB::black());
            }
        }
    }

    #[test]
    fn write_and_read_pixels() {
        let mut image = Image::new(10, 20);
        *image.at_mut(2, 3) = RGB::new(1.0, 0.0, 0.0);
        *image.at_mut(9, 19) = RGB::new(0.0, 0.0, 1.0);
        assert_eq!(*image.at(2, 3), RGB::new(1.0, 0.0, 0.0));
        assert_eq!(*image.at(9, 19), RGB::new(0.0, 0.0, 1.0));
        assert_eq!(*image.at(3, 2), RGB::black());
    }

    #[test]
    #[should_panic]
    fn column_past_width_panics() {
        let mut image = Image::new(2, 2);
        *image.at_mut(2, 0) = RGB::white();
    }

    #[test]
    fn ppm_output() {
        let mut image = Image::new(3, 2);
        *image.at_mut(0, 0) = RGB::new(1.5, 0.0, 0.0);
        *image.at_mut(1, 0) = RGB::new(0.0, 0.5, 0.0);
        *image.at_mut(2, 1) = RGB::new(-0.5, 0.0, 1.0);
        let mut out = Vec::new();
        image.write_ppm(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "P3\n3 2\n255\n255 0 0\n0 127 0\n0 0 0\n0 0 0\n0 0 0\n0 0 255\n"
        );
    }

    #[test]
    fn save_to_file() {
        let dir = std::env::temp_dir().join(format!("phongtrace-image-{}", std::process::id()));
        let path = dir.join("nested").join("out.ppm");
        let mut image = Image::new(1, 1);
        *image.at_mut(0, 0) = RGB::white();
        image.save_ppm(&path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "P3\n1 1\n255\n255 255 255\n");
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn bad_path_is_io_error() {
        let image = Image::new(1, 1);
        let file = std::env::temp_dir().join(format!("phongtrace-file-{}", std::process::id()));
        std::fs::write(&file, b"x").unwrap();
        // a regular file cannot be a parent directory
        let result = image.save_ppm(file.join("out.ppm"));
        assert!(matches!(result, Err(Error::Io(_))));
        std::fs::remove_file(&file).unwrap();
    }
}

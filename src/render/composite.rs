use crate::foundation::error::{DogfieldError, DogfieldResult};
use crate::foundation::math::mul_div255_u8;

pub(crate) type PremulRgba8 = [u8; 4];

/// Source-over for one premultiplied pixel.
pub(crate) fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    let sa = src[3];
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(sa);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255_u8(u16::from(dst[i]), inv));
    }
    out
}

/// Composite a full-size layer over `dst`.
pub(crate) fn over_in_place(dst: &mut [u8], src: &[u8]) -> DogfieldResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(DogfieldError::render(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        if s[3] == 0 {
            continue;
        }
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// A premultiplied image placed at an integer offset on the frame.
pub(crate) struct Tile<'a> {
    pub(crate) x: i32,
    pub(crate) y: i32,
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) data: &'a [u8],
}

/// Composite `tile` over a `dst_width`×`dst_height` frame. Parts outside the frame are dropped.
pub(crate) fn over_at(
    dst: &mut [u8],
    dst_width: u32,
    dst_height: u32,
    tile: &Tile<'_>,
) -> DogfieldResult<()> {
    if dst.len() != (dst_width as usize) * (dst_height as usize) * 4 {
        return Err(DogfieldError::render("over_at: destination size mismatch"));
    }
    if tile.data.len() != (tile.width as usize) * (tile.height as usize) * 4 {
        return Err(DogfieldError::render("over_at: tile size mismatch"));
    }

    let x0 = tile.x.max(0);
    let y0 = tile.y.max(0);
    let x1 = (i64::from(tile.x) + i64::from(tile.width)).min(i64::from(dst_width)) as i32;
    let y1 = (i64::from(tile.y) + i64::from(tile.height)).min(i64::from(dst_height)) as i32;
    if x0 >= x1 || y0 >= y1 {
        return Ok(());
    }

    for y in y0..y1 {
        let src_row = ((y - tile.y) as usize) * tile.width as usize;
        let dst_row = (y as usize) * dst_width as usize;
        for x in x0..x1 {
            let si = (src_row + (x - tile.x) as usize) * 4;
            let s = &tile.data[si..si + 4];
            if s[3] == 0 {
                continue;
            }
            let di = (dst_row + x as usize) * 4;
            let d = &mut dst[di..di + 4];
            let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
            d.copy_from_slice(&out);
        }
    }
    Ok(())
}

/// Overwrite every pixel with `rgba`.
pub(crate) fn fill_solid(dst: &mut [u8], rgba: PremulRgba8) {
    for px in dst.chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

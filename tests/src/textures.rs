#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use std::panic;
    use std::sync::Arc;

    use akari::{
        math::{Spectrum, Vec3},
        textures::{ConstantTexture, ImageTexture, NormalMappedTexture, Texture},
    };

    #[test]
    fn constant_ignores_uv() {
        let c = Spectrum::new(0.1, 0.2, 0.3);
        let t = ConstantTexture::new(c);
        assert_eq!(t.color_at(0.0, 0.0), c);
        assert_eq!(t.color_at(0.9, -3.7), c);
        // Plain color textures carry no normal perturbation
        assert!(t.normal_at(0.5, 0.5).is_none());
    }

    #[test]
    fn image_sampling() {
        // 2x2: red, green / blue, white, packed 0x00RRGGBB
        let t = ImageTexture::from_raw(2, 2, &[0xFF0000, 0x00FF00, 0x0000FF, 0xFFFFFF]);
        assert_eq!(t.width(), 2);
        assert_eq!(t.height(), 2);

        // v is flipped so v near 1 samples the first buffer row
        assert_abs_diff_eq!(t.color_at(0.1, 0.9), Spectrum::new(1.0, 0.0, 0.0));
        assert_abs_diff_eq!(t.color_at(0.6, 0.9), Spectrum::new(0.0, 1.0, 0.0));
        assert_abs_diff_eq!(t.color_at(0.1, 0.1), Spectrum::new(0.0, 0.0, 1.0));
        assert_abs_diff_eq!(t.color_at(0.6, 0.1), Spectrum::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn image_repeats() {
        let t = ImageTexture::from_raw(2, 2, &[0xFF0000, 0x00FF00, 0x0000FF, 0xFFFFFF]);

        let inside = t.color_at(0.1, 0.9);
        assert_eq!(t.color_at(1.1, 0.9), inside);
        assert_eq!(t.color_at(-0.9, 0.9), inside);
        assert_eq!(t.color_at(0.1, 1.9), inside);
        assert_eq!(t.color_at(0.1, -1.1), inside);
    }

    #[test]
    fn image_extent_mismatch_fails() {
        let result = panic::catch_unwind(|| ImageTexture::from_raw(2, 2, &[0, 0, 0]));
        assert!(result.is_err());

        let result = panic::catch_unwind(|| ImageTexture::from_raw(0, 2, &[]));
        assert!(result.is_err());
    }

    #[test]
    fn normal_map_decodes_tangent_space() {
        let base = Arc::new(ConstantTexture::new(Spectrum::new(0.5, 0.5, 0.5)));

        // 0x8080FF is the canonical "straight up" normal texel
        let flat = NormalMappedTexture::new(base.clone(), ImageTexture::from_raw(1, 1, &[0x8080FF]));
        let n = flat.normal_at(0.5, 0.5).unwrap();
        assert_abs_diff_eq!(n.x, 0.0, epsilon = 0.01);
        assert_abs_diff_eq!(n.y, 0.0, epsilon = 0.01);
        assert_abs_diff_eq!(n.z, 1.0, epsilon = 0.01);
        assert_abs_diff_eq!(n.len(), 1.0, epsilon = 1e-12);

        // Color lookups pass through to the base texture
        assert_eq!(flat.color_at(0.5, 0.5), Spectrum::new(0.5, 0.5, 0.5));

        // A fully red texel leans the normal along +x
        let leaning =
            NormalMappedTexture::new(base, ImageTexture::from_raw(1, 1, &[0xFF8080]));
        let n: Vec3 = leaning.normal_at(0.5, 0.5).unwrap();
        assert!(n.x > 0.9);
    }
}

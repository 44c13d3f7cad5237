//! Integration tests for the color vision LUT crates.
//!
//! End-to-end scenarios that cross crate boundaries: request validation,
//! sampling, `.cube` writing and reading back, and the plugin controller
//! on real files.

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use cvd_color::{
        Deficiency, GenerateRequest, LutSize, Operation, Strength, build_lut, generate_lut,
    };
    use cvd_lut::{cell_center, read_cube_3d};
    use cvd_math::Vec3;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn generate_to(dir: &Path, req: GenerateRequest) -> std::path::PathBuf {
        let out = dir.join(req.default_file_name());
        generate_lut(&req.with_output(out)).expect("generation failed")
    }

    /// Deutan correction on a 16³ grid: header, row count, row format and
    /// the first sample.
    #[test]
    fn test_deutan_correct_16() {
        let dir = tempdir().unwrap();
        let req = GenerateRequest::parse("deutan", "correct", 1.0, 16).unwrap();
        let path = generate_to(dir.path(), req);

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "TITLE \"Deutan Correct (strength=1.00)\"");
        assert_eq!(lines[1], "LUT_3D_SIZE 16");

        let rows = &lines[2..];
        assert_eq!(rows.len(), 4096);
        for row in rows {
            let values: Vec<&str> = row.split(' ').collect();
            assert_eq!(values.len(), 3, "row: {row}");
            for v in values {
                let (_, frac) = v.split_once('.').expect("decimal point");
                assert_eq!(frac.len(), 6, "row: {row}");
            }
        }

        let first = Operation::Correct.apply(Vec3::splat(0.03125), Deficiency::Deutan, 1.0);
        assert_eq!(
            rows[0],
            format!("{:.6} {:.6} {:.6}", first.x, first.y, first.z)
        );
        assert_eq!(rows[0], "0.031250 0.031250 0.031250");
    }

    /// With N=2 the rows follow the cell centers with B fastest, then G,
    /// then R.
    #[test]
    fn test_sample_ordering_n2() {
        let lut = cvd_lut::Lut3D::sample(2, |rgb| rgb).unwrap();
        let expected = [
            [0.25, 0.25, 0.25],
            [0.25, 0.25, 0.75],
            [0.25, 0.75, 0.25],
            [0.25, 0.75, 0.75],
            [0.75, 0.25, 0.25],
            [0.75, 0.25, 0.75],
            [0.75, 0.75, 0.25],
            [0.75, 0.75, 0.75],
        ];
        assert_eq!(lut.data, expected);
    }

    /// Written files parse back to the same size and values, within the
    /// six-decimal precision of the format.
    #[test]
    fn test_cube_roundtrip() {
        let dir = tempdir().unwrap();
        for op in Operation::ALL {
            let req = GenerateRequest::new(Deficiency::Protan, op)
                .with_strength(Strength::new(0.7).unwrap())
                .with_size(LutSize::S16);
            let expected = build_lut(&req).unwrap();
            let path = generate_to(dir.path(), req);

            let lut = read_cube_3d(&path).unwrap();
            assert_eq!(lut.size, 16);
            assert_eq!(lut.data.len(), 4096);
            assert_eq!(lut.title, expected.title);
            for (got, want) in lut.data.iter().zip(&expected.data) {
                for c in 0..3 {
                    assert_abs_diff_eq!(got[c], want[c], epsilon = 6e-7);
                }
            }
        }
    }

    /// Every operation at strength 0 writes an identity LUT at every size,
    /// up to the six-decimal rounding of the file.
    #[test]
    fn test_zero_strength_identity_file() {
        let dir = tempdir().unwrap();
        for size in LutSize::ALL {
            let n = size.get();
            for op in Operation::ALL {
                for d in Deficiency::ALL {
                    let req = GenerateRequest::new(d, op)
                        .with_strength(Strength::NONE)
                        .with_size(size);
                    let lut = read_cube_3d(generate_to(dir.path(), req)).unwrap();
                    assert_eq!(lut.size, n);

                    for (i, got) in lut.data.iter().enumerate() {
                        let want = [i / (n * n), (i / n) % n, i % n].map(|k| cell_center(k, n));
                        for c in 0..3 {
                            assert_abs_diff_eq!(got[c], want[c], epsilon = 6e-7);
                        }
                    }
                }
            }
        }
    }

    /// Every size produces size³ rows; all values stay in [0, 1].
    #[test]
    fn test_sizes_and_range() {
        for size in LutSize::ALL {
            let req = GenerateRequest::new(Deficiency::Tritan, Operation::Daltonize).with_size(size);
            let lut = build_lut(&req).unwrap();
            assert_eq!(lut.data.len(), size.entries());
            assert!(lut.is_normalized());
        }
    }

    /// Bad input aimed at a real output path is rejected before the file is
    /// created.
    #[test]
    fn test_validation_creates_no_file() {
        let dir = tempdir().unwrap();
        let cases = [
            ("deutan", "correct", 1.5, 32, "strength"),
            ("deutan", "correct", -0.1, 32, "strength"),
            ("deutan", "correct", 1.0, 10, "lut_size"),
            ("achromatopsia", "correct", 1.0, 32, "deficiency"),
            ("deutan", "recolor", 1.0, 32, "operation"),
        ];

        for (d, op, s, n, field) in cases {
            let out = dir.path().join(format!("{field}.cube"));
            let err = GenerateRequest::parse(d, op, s, n)
                .map(|req| req.with_output(&out))
                .and_then(|req| generate_lut(&req))
                .unwrap_err();
            assert_eq!(err.field(), Some(field));
            assert!(!out.exists(), "{} was created", out.display());
        }
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);

        // The same path accepts a valid request.
        let out = dir.path().join("strength.cube");
        let req = GenerateRequest::parse("deutan", "correct", 1.0, 16).unwrap();
        assert_eq!(generate_lut(&req.with_output(&out)).unwrap(), out);
    }

    /// Default names encode the truncated percentage.
    #[test]
    fn test_default_file_names() {
        let name = |d, op, s| {
            GenerateRequest::parse(d, op, s, 32)
                .unwrap()
                .default_file_name()
        };
        assert_eq!(name("deutan", "correct", 1.0), "deutan_correct_100.cube");
        assert_eq!(name("protanope", "simulate", 0.5), "protan_simulate_50.cube");
        assert_eq!(name("tritan", "daltonise", 0.29), "tritan_daltonize_28.cube");
        assert_eq!(name("tritan", "daltonize", 0.0), "tritan_daltonize_0.cube");
    }

    /// Settings on disk drive the controller end to end.
    #[test]
    fn test_controller_with_file_settings() {
        use cvd_plugin::{
            Controller, CorrectionConfig, FileSettings, LookBackend, LookOutcome, PluginResult,
            SettingsStore,
        };
        use std::cell::RefCell;

        #[derive(Default)]
        struct Recorder(RefCell<Vec<Option<std::path::PathBuf>>>);

        impl LookBackend for Recorder {
            fn set_look(&self, path: Option<&Path>) -> PluginResult<LookOutcome> {
                self.0.borrow_mut().push(path.map(Path::to_path_buf));
                Ok(LookOutcome::ok())
            }
        }

        let dir = tempdir().unwrap();
        let settings_path = dir.path().join("config").join("settings.yaml");
        let runtime = dir.path().join("run");

        let mut ctl = Controller::new(
            FileSettings::open(&settings_path).unwrap(),
            Recorder::default(),
            &runtime,
        );
        let cfg = CorrectionConfig {
            deficiency: Deficiency::Protan,
            operation: Operation::Daltonize,
            strength: 0.5,
            lut_size: 16,
            ..CorrectionConfig::default()
        };
        ctl.update(cfg.clone(), Some("730")).unwrap();

        let path = ctl.apply(Some("730")).unwrap().unwrap();
        assert_eq!(path, runtime.join("lut.cube"));
        let lut = read_cube_3d(&path).unwrap();
        assert_eq!(lut.size, 16);
        assert_eq!(lut.title.as_deref(), Some("Protan Daltonize (strength=0.50)"));

        // Global scope untouched and persisted separately.
        let reopened = FileSettings::open(&settings_path).unwrap();
        assert_eq!(reopened.get(Some("730")), cfg);
        assert_eq!(reopened.get(None), CorrectionConfig::default());

        ctl.shutdown().unwrap();
        assert_eq!(ctl.look().0.borrow().last(), Some(&None));
    }
}

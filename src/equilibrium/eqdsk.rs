//! eqdsk (tokamak equilibrium reconstruction) text-format ingest.
//!
//! Free-form, whitespace-separated text: a comment token and three
//! integers on the header line (`case_code`, NR, Nz); five geometry
//! doubles; five doubles giving R0/z0/psi_axis/psi_edge/Btor; Ip plus four
//! ignored doubles; five further ignored doubles; `4*NR` ignored profile
//! doubles; then `NR*Nz` psi values in row-major order with R fastest. All
//! psi values are negated on load.

use crate::equilibrium::Equilibrium;
use crate::error::{Result, WallLoadError};
use std::path::Path;

struct Tokens<'a> {
    iter: std::str::SplitWhitespace<'a>,
    path: &'a Path,
}

impl<'a> Tokens<'a> {
    fn next_str(&mut self) -> Result<&'a str> {
        self.iter
            .next()
            .ok_or_else(|| WallLoadError::malformed(self.path, "unexpected end of file"))
    }

    fn next_f64(&mut self) -> Result<f64> {
        let tok = self.next_str()?;
        tok.parse::<f64>()
            .map_err(|_| WallLoadError::malformed(self.path, format!("expected a number, got '{tok}'")))
    }

    fn next_usize(&mut self) -> Result<usize> {
        let tok = self.next_str()?;
        tok.parse::<usize>()
            .map_err(|_| WallLoadError::malformed(self.path, format!("expected an integer, got '{tok}'")))
    }
}

pub(crate) fn load(path: &Path) -> Result<Equilibrium> {
    let contents = std::fs::read_to_string(path).map_err(|e| WallLoadError::from_io(path, e))?;
    let mut t = Tokens {
        iter: contents.split_whitespace(),
        path,
    };

    // Header: comment token, case_code, NR, Nz.
    let _comment = t.next_str()?;
    let _case_code = t.next_usize()?;
    let nr = t.next_usize()?;
    let nz = t.next_usize()?;
    if nr < 2 || nz < 2 {
        return Err(WallLoadError::malformed(
            path,
            format!("grid must be at least 2x2, got {nr}x{nz}"),
        ));
    }

    let r_box_length = t.next_f64()?;
    let z_box_length = t.next_f64()?;
    let _r0_exp = t.next_f64()?;
    let r_box_left = t.next_f64()?;
    let z_box_mid = t.next_f64()?;

    let r0 = t.next_f64()?;
    let z0 = t.next_f64()?;
    let psi_axis = t.next_f64()?;
    let psi_edge = t.next_f64()?;
    let btor = t.next_f64()?;

    let ip = t.next_f64()?;
    for _ in 0..4 {
        t.next_f64()?;
    }
    for _ in 0..5 {
        t.next_f64()?;
    }
    for _ in 0..(4 * nr) {
        t.next_f64()?;
    }

    let dr = r_box_length / (nr as f64 - 1.0);
    let r: Vec<f64> = (0..nr).map(|i| r_box_left + dr * i as f64).collect();
    let dz = z_box_length / (nz as f64 - 1.0);
    let z: Vec<f64> = (0..nz)
        .map(|j| z_box_mid - z_box_length / 2.0 + dz * j as f64)
        .collect();

    let mut psi = Vec::with_capacity(nr * nz);
    for _ in 0..(nr * nz) {
        psi.push(-t.next_f64()?);
    }

    Equilibrium::new(r, z, psi, r0, z0, psi_axis, psi_edge, btor, ip)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_fixture(nr: usize, nz: usize) -> tempfile_stub::NamedTempFile {
        // Minimal 3x3 grid, psi = 0 everywhere except axis/edge markers,
        // enough to exercise field parsing order end-to-end.
        let mut body = String::new();
        body.push_str("EQDSK-TEST 0 3 3\n");
        body.push_str("1.0 2.0 0.0 0.5 0.0\n"); // rBoxLength zBoxLength r0Exp rBoxLeft zBoxMid
        body.push_str("1.0 0.0 5.0 1.0 2.0\n"); // R0 z0 psiAxis psiEdge Btor
        body.push_str("1.0e6 0.0 0.0 0.0 0.0\n"); // Ip + 4 ignored
        body.push_str("0.0 0.0 0.0 0.0 0.0\n"); // 5 ignored
        for _ in 0..(4 * nr) {
            body.push_str("0.0 ");
        }
        body.push('\n');
        for _ in 0..(nr * nz) {
            body.push_str("1.0 ");
        }
        let mut f = tempfile_stub::NamedTempFile::new();
        f.write_all(body.as_bytes()).unwrap();
        f
    }

    // A tiny in-module stand-in for a temp-file helper so these tests don't
    // reach for an external crate just to write one fixture file.
    mod tempfile_stub {
        use std::fs::File;
        use std::io::Write;
        use std::path::PathBuf;

        pub struct NamedTempFile {
            path: PathBuf,
            file: File,
        }

        impl NamedTempFile {
            pub fn new() -> Self {
                let path = std::env::temp_dir().join(format!(
                    "wallload_eqdsk_test_{}_{}.geqdsk",
                    std::process::id(),
                    super::super::eqdsk_test_counter()
                ));
                let file = File::create(&path).unwrap();
                NamedTempFile { path, file }
            }

            pub fn path(&self) -> &std::path::Path {
                &self.path
            }
        }

        impl Write for NamedTempFile {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.file.write(buf)
            }
            fn flush(&mut self) -> std::io::Result<()> {
                self.file.flush()
            }
        }

        impl Drop for NamedTempFile {
            fn drop(&mut self) {
                let _ = std::fs::remove_file(&self.path);
            }
        }
    }

    #[test]
    fn loads_header_and_negates_psi() {
        let f = write_fixture(3, 3);
        let eq = load(f.path()).unwrap();
        assert_eq!(eq.rmin(), 0.5);
        assert!((eq.r0() - 1.0).abs() < 1e-12);
        assert!((eq.psi_axis() - 5.0).abs() < 1e-12);
        // psi on disk was 1.0 everywhere -> stored negated as -1.0.
        assert!((eq.psi(eq.rmin(), eq.zmin()) - (-1.0)).abs() < 1e-9);
    }

    #[test]
    fn missing_file_reports_file_not_found() {
        let err = load(Path::new("/nonexistent/path/to/equilibrium.geqdsk")).unwrap_err();
        assert!(matches!(err, WallLoadError::FileNotFound(_)));
    }

    #[test]
    fn truncated_file_reports_malformed() {
        let mut f = tempfile_stub::NamedTempFile::new();
        f.write_all(b"COMMENT 0 3 3\n1.0 2.0").unwrap();
        let err = load(f.path()).unwrap_err();
        assert!(matches!(err, WallLoadError::MalformedFile { .. }));
    }
}

#[cfg(test)]
fn eqdsk_test_counter() -> u64 {
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    COUNTER.fetch_add(1, Ordering::Relaxed)
}

use std::fmt::{Display, Formatter};
use std::path::Path;
use std::time::Duration;

const SIZE_UNITS: [&str; 3] = ["B", "KB", "MB"];

/// Timing and throughput summary of one invocation, printed after the output
/// file is written. The size is the processed (padded) byte count and the
/// elapsed time covers the transform only, not file I/O or key handling.
pub struct Report<'a> {
    pub algo: &'static str,
    pub decrypt: bool,
    pub input: &'a Path,
    pub output: &'a Path,
    pub size: usize,
    pub elapsed: Duration,
}

impl Report<'_> {
    fn file_size(&self) -> (f64, &'static str) {
        let (mut size, mut unit) = (self.size as f64, 0);
        while size > 1024.0 && unit + 1 < SIZE_UNITS.len() {
            size /= 1024.0;
            unit += 1;
        }
        (size, SIZE_UNITS[unit])
    }

    fn speed(&self) -> (f64, &'static str) {
        let secs = self.elapsed.as_secs_f64().max(1e-9);
        let mbps = self.size as f64 / secs / 1024.0 / 1024.0;
        if mbps > 1024.0 {
            (mbps / 1024.0, "GB/s")
        } else {
            (mbps, "MB/s")
        }
    }
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (size, size_unit) = self.file_size();
        let (speed, speed_unit) = self.speed();

        writeln!(f, "--------------------------")?;
        writeln!(f, "| encryption & signature |")?;
        writeln!(f, "--------------------------")?;
        writeln!(f, "| algo   | {:<12} |", self.algo)?;
        writeln!(f, "| is_dec | {:<12} |", if self.decrypt { "Yes" } else { "No" })?;
        writeln!(f, "| input  | {:<12} |", self.input.display())?;
        writeln!(f, "| size   | {size:<9.2}{size_unit:<3} |")?;
        writeln!(f, "| output | {:<12} |", self.output.display())?;
        writeln!(f, "| time   | {:<10.2}ms |", self.elapsed.as_secs_f64() * 1e3)?;
        writeln!(f, "| speed  | {speed:<8.2}{speed_unit:<4} |")?;
        write!(f, "--------------------------")
    }
}

#[cfg(test)]
mod tests {
    use super::Report;
    use std::path::Path;
    use std::time::Duration;

    fn report(size: usize, elapsed: Duration) -> Report<'static> {
        Report {
            algo: "rsa",
            decrypt: false,
            input: Path::new("in.bin"),
            output: Path::new("in.bin.enc"),
            size,
            elapsed,
        }
    }

    #[test]
    fn size_units_cap_at_mb() {
        assert_eq!(report(512, Duration::from_secs(1)).file_size().1, "B");
        assert_eq!(report(2048, Duration::from_secs(1)).file_size().1, "KB");
        assert_eq!(
            report(3 << 30, Duration::from_secs(1)).file_size().1,
            "MB"
        );
    }

    #[test]
    fn speed_switches_to_gb() {
        let fast = report(3 << 30, Duration::from_millis(1));
        assert_eq!(fast.speed().1, "GB/s");
        let slow = report(1024, Duration::from_secs(1));
        assert_eq!(slow.speed().1, "MB/s");
    }

    #[test]
    fn renders_every_field() {
        let s = format!("{}", report(100, Duration::from_millis(5)));
        for needle in ["rsa", "in.bin", "in.bin.enc", "ms", "MB/s"] {
            assert!(s.contains(needle), "missing `{needle}` in:\n{s}");
        }
    }
}

use crate::core::ecdf::is_ascending;
use crate::core::error::{EcdfError, Result};
use crate::core::model::PERCENTILES;
use std::fmt::Write;

/// Renders the percentile table:
///
/// ```text
/// <school> students
///
/// percentile	mean_test_score
/// 1	<value>
/// ...
/// 100	<value>
/// ```
pub fn render(school: &str, ecdf: &[f64]) -> Result<String> {
    if !is_ascending(ecdf) {
        return Err(EcdfError::invalid("format accepts only sorted lists"));
    }
    if ecdf.len() != PERCENTILES {
        return Err(EcdfError::invalid("The length of the data was not 100."));
    }

    let mut out = String::with_capacity(64 + PERCENTILES * 12);
    write_table(&mut out, school, ecdf).map_err(|e| EcdfError::invalid(e.to_string()))?;
    Ok(out)
}

fn write_table(w: &mut dyn Write, school: &str, ecdf: &[f64]) -> std::fmt::Result {
    writeln!(w, "{} students", school)?;
    writeln!(w)?;
    writeln!(w, "percentile\tmean_test_score")?;
    for (rank, value) in ecdf.iter().enumerate() {
        writeln!(w, "{}\t{}", rank + 1, fmt_score(*value))?;
    }
    Ok(())
}

/// Shortest round-trip text that always keeps a fractional part or
/// exponent, e.g. `75.0`, `-4.5`, `92.22222222222223`.
fn fmt_score(v: f64) -> String {
    format!("{:?}", v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ecdf::sample;

    fn table() -> Vec<f64> {
        sample(&[-4.5, -2.0, 0.4, 0.55, 0.7, 0.85, 1.97, 3.77]).unwrap()
    }

    #[test]
    fn header_and_first_row() {
        let out = render("ABC University", &table()).unwrap();
        assert!(out.starts_with("ABC University students\n\npercentile\tmean_test_score\n1\t-4.5\n"));
    }

    #[test]
    fn last_row() {
        let out = render("ABC University", &table()).unwrap();
        assert!(out.ends_with("\n100\t3.77\n"));
    }

    #[test]
    fn ranks_run_one_to_hundred() {
        let out = render("X", &table()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 103);
        assert_eq!(lines[1], "");
        for (i, line) in lines[3..].iter().enumerate() {
            let (rank, _) = line.split_once('\t').unwrap();
            assert_eq!(rank, (i + 1).to_string());
        }
    }

    #[test]
    fn whole_numbers_keep_decimal_point() {
        let out = render("X", &[75.0; 100]).unwrap();
        assert!(out.contains("\n1\t75.0\n"));
        assert_eq!(fmt_score(92.22222222222223), "92.22222222222223");
        assert_eq!(fmt_score(-2.0), "-2.0");
    }

    #[test]
    fn rejects_unsorted() {
        let mut bad = table();
        bad[0] = 3.77;
        bad[99] = -4.5;
        assert!(matches!(
            render("school", &bad),
            Err(EcdfError::InvalidArgument(_))
        ));
    }

    #[test]
    fn rejects_wrong_length() {
        let short = &table()[..30];
        assert!(matches!(
            render("school", short),
            Err(EcdfError::InvalidArgument(_))
        ));
        assert!(matches!(render("school", &[]), Err(EcdfError::InvalidArgument(_))));
    }
}

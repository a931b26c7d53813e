use std::fmt;
use std::str::FromStr;

/// The only option the command line accepts.
pub const SCHOOL_FLAG: &str = "--school";

/// Required (case-sensitive) suffix of every input file name.
pub const CSV_EXT: &str = ".csv";

/// `student_id,course_name,school_name,test_date,test_score`
pub const FIELD_COUNT: usize = 5;

pub const PERCENTILES: usize = 100;

const ID_FIELD: usize = 0;
const SCHOOL_FIELD: usize = 2;
const SCORE_FIELD: usize = 4;

/// One input line. Course name and test date are carried by the file but
/// never looked at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Record<'a> {
    pub student_id: i64,
    pub school: &'a [u8],
    pub score: f64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RecordDefect {
    FieldCount(usize),
    NotNumeric,
}

impl fmt::Display for RecordDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordDefect::FieldCount(n) => write!(f, "Length != {}, got {}", FIELD_COUNT, n),
            RecordDefect::NotNumeric => f.write_str("student_id or score not numeric"),
        }
    }
}

impl<'a> Record<'a> {
    /// Parses one line. Surrounding whitespace (including a `\r` left over
    /// from CRLF files) is ignored.
    pub fn parse(line: &'a [u8]) -> Result<Self, RecordDefect> {
        let line = line.trim_ascii();
        let mut fields: [&[u8]; FIELD_COUNT] = [b"".as_slice(); FIELD_COUNT];
        let mut count = 0usize;
        let mut start = 0usize;
        for end in memchr::memchr_iter(b',', line).chain(std::iter::once(line.len())) {
            if count < FIELD_COUNT {
                fields[count] = &line[start..end];
            }
            count += 1;
            start = end + 1;
        }
        if count != FIELD_COUNT {
            return Err(RecordDefect::FieldCount(count));
        }

        let student_id = parse_num::<i64>(fields[ID_FIELD]).ok_or(RecordDefect::NotNumeric)?;
        let score = parse_num::<f64>(fields[SCORE_FIELD]).ok_or(RecordDefect::NotNumeric)?;

        Ok(Self {
            student_id,
            school: unquote(fields[SCHOOL_FIELD]),
            score,
        })
    }
}

fn parse_num<T: FromStr>(field: &[u8]) -> Option<T> {
    std::str::from_utf8(field.trim_ascii()).ok()?.parse().ok()
}

/// Drops one leading and one trailing ASCII double quote, if present.
pub fn unquote(field: &[u8]) -> &[u8] {
    let field = field.strip_prefix(b"\"").unwrap_or(field);
    field.strip_suffix(b"\"").unwrap_or(field)
}

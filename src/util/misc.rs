use std::fmt;

use crate::error_exit;

pub type Res<T = ()> = Result<T, Box<dyn std::error::Error>>;

pub fn next_value<T>(it: &mut std::slice::Iter<'_, std::string::String>, opt: &str) -> T
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    let n = match it.next() {
        Some(n) => n,
        None => error_exit!("{}: value missing", opt),
    };
    match n.parse() {
        Ok(v) => v,
        Err(e) => error_exit!("{}: {} '{}'", opt, e, n),
    }
}

// ファイルを行単位で読み込み
pub fn read_lines(file_path: &str) -> Res<Vec<String>> {
    use std::io::BufRead;
    let file = std::fs::File::open(file_path)?;
    let lines = std::io::BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(lines)
}

#[test]
fn test_next_value() {
    let args = vec!["12".to_string(), "x".to_string()];
    let mut it = args.iter();
    let n: usize = next_value(&mut it, "-n");
    assert_eq!(n, 12);
    assert_eq!(it.next().map(|s| s.as_str()), Some("x"));
}

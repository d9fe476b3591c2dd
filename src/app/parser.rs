use crate::model::*;
use crate::notation::*;
use crate::util::misc::*;
use crate::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Hand,  // H: 副露+立牌+和了牌
    Tiles, // T: 牌の並びのみ
}

#[derive(Debug)]
pub struct ParserApp {
    mode: Mode,
    args: Vec<String>,
    json: bool,
    max_cnt: usize,
}

impl ParserApp {
    pub fn new(mode: Mode, args: Vec<String>) -> Self {
        Self {
            mode,
            args,
            json: false,
            max_cnt: MAX_BUFFER,
        }
    }

    pub fn run(&mut self) {
        let mut file_path = "".to_string();
        let mut exp: Option<String> = None;
        let mut it = self.args.iter();
        while let Some(s) = it.next() {
            match s.as_str() {
                "-j" => self.json = true,
                "-f" => file_path = next_value(&mut it, s),
                "-n" => self.max_cnt = next_value(&mut it, s),
                _ => {
                    if s.starts_with('-') {
                        error!("unknown option: {}", s);
                        return;
                    }
                    if exp.is_some() {
                        error!("multiple expression is not allowed");
                        return;
                    }
                    exp = Some(s.clone());
                }
            }
        }

        match (file_path.is_empty(), exp) {
            (true, Some(exp)) => {
                if let Err(e) = self.process_expression(&exp) {
                    error!("{}", e);
                }
            }
            (false, None) => {
                if let Err(e) = self.run_from_file(&file_path) {
                    error!("{}", e);
                }
            }
            _ => print_usage(),
        }
    }

    fn run_from_file(&self, file_path: &str) -> Res<Vec<Verify>> {
        let mut verifies = vec![];
        for line in read_lines(file_path)? {
            let e = line.replace(' ', "");
            if e.is_empty() || e.starts_with('#') {
                // 空行とコメント行はスキップ
                println!("> {}", line);
                continue;
            }
            match self.process_expression(&line) {
                Ok(v) => verifies.push(v),
                Err(e) => error!("{}", e),
            }
        }

        let count = |v: Verify| verifies.iter().filter(|&&x| x == v).count();
        info!(
            "verify ok: {}, error: {}, skip: {}",
            count(Verify::Ok),
            count(Verify::Error),
            count(Verify::Skip)
        );
        Ok(verifies)
    }

    // "式|期待値" の形式の場合は結果を検証
    fn process_expression(&self, line: &str) -> Res<Verify> {
        let (exp, expected) = split_expected(line)?;
        println!("> {}", exp);

        let actual = match self.mode {
            Mode::Hand => self.print_hand(exp)?,
            Mode::Tiles => self.print_tiles(exp)?,
        };

        let verify = match expected {
            Some(v) if v == actual => Verify::Ok,
            Some(v) => {
                warn!("expected {}, but got {}: '{}'", v, actual, exp);
                Verify::Error
            }
            None => Verify::Skip,
        };
        println!("verify: {:?}", verify);
        Ok(verify)
    }

    // ステータスコードを返却
    fn print_hand(&self, exp: &str) -> Res<i64> {
        let ph = match parse_hand(exp) {
            Ok(ph) => ph,
            Err(e) => {
                error!("{}: '{}'", e, exp);
                println!("code: {}", e.code());
                return Ok(e.code() as i64);
            }
        };

        if self.json {
            println!("{}", serde_json::to_string(&ph)?);
        } else {
            let packs = ph
                .hand
                .fixed_packs
                .iter()
                .map(|p| format!("{:?}", p))
                .collect::<Vec<_>>()
                .join(", ");
            println!("packs({}): {}", ph.hand.pack_count(), packs);
            println!(
                "standing({}): {:?}",
                ph.hand.tile_count(),
                ph.hand.standing_tiles
            );
            println!("win: {:?}", ph.win_tile);
        }
        Ok(PARSE_NO_ERROR as i64)
    }

    // 読み取った牌の数を返却
    fn print_tiles(&self, exp: &str) -> Res<i64> {
        let tiles = parse_tiles(exp, self.max_cnt);
        if self.json {
            println!("{}", serde_json::to_string(&tiles)?);
        } else {
            println!("tiles({}): {:?}", tiles.len(), tiles);
        }
        Ok(tiles.len() as i64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verify {
    Ok,
    Error,
    Skip,
}

fn split_expected(line: &str) -> Res<(&str, Option<i64>)> {
    match line.rsplit_once('|') {
        Some((exp, v)) => {
            let v = v
                .trim()
                .parse::<i64>()
                .map_err(|e| format!("invalid expected value '{}': {}", v, e))?;
            Ok((exp, Some(v)))
        }
        None => Ok((line, None)),
    }
}

fn print_usage() {
    error!(
        r"invalid input
Usage
    $ cargo run H EXPRESSION [-j]
    $ cargo run H -f FILE [-j]
    $ cargo run T EXPRESSION [-n MAX] [-j]
Options
    -j: print result as json
    -f: read expressions from file instead of a commandline expression
        ('EXPRESSION|EXPECTED' lines are verified against the result)
    -n: max number of tiles to read in T mode (default: 14)
"
    );
}

#[test]
fn test_split_expected() {
    assert_eq!(split_expected("135m |-4").unwrap(), ("135m ", Some(-4)));
    assert_eq!(split_expected("123m").unwrap(), ("123m", None));
    assert!(split_expected("123m|x").is_err());
}

#[test]
fn test_parser_app() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/hands.txt");
    let app = ParserApp::new(Mode::Hand, vec![]);
    let verifies = app.run_from_file(path).unwrap();
    assert!(!verifies.is_empty());
    assert!(verifies.iter().all(|&v| v == Verify::Ok));
}

#[test]
fn test_tiles_mode() {
    let mut app = ParserApp::new(Mode::Tiles, vec![]);
    assert_eq!(app.process_expression("123456789p|9").unwrap(), Verify::Ok);
    app.max_cnt = 4;
    assert_eq!(app.process_expression("123456789p|4").unwrap(), Verify::Ok);
    assert_eq!(app.process_expression("8z|0").unwrap(), Verify::Ok);
    assert_eq!(app.process_expression("8z|1").unwrap(), Verify::Error);
}

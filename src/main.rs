//! Hanpul - 한글 자모 분해 CLI

use hanpul::unpack;
use serde::Serialize;
use std::io::Read;

/// `--json` 출력 형식
#[derive(Serialize)]
struct UnpackRecord<'a> {
    input: &'a str,
    output: &'a str,
}

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut json_output = false;
    let mut words: Vec<String> = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json_output = true,
            "-h" | "--help" => {
                print_usage();
                return;
            }
            _ => words.push(arg),
        }
    }

    // 텍스트 인자가 없으면 표준 입력에서 읽음
    let input = if words.is_empty() {
        let mut buf = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
            log::error!("표준 입력 읽기 실패: {}", e);
            std::process::exit(1);
        }
        buf
    } else {
        words.join(" ")
    };

    let output = unpack(&input);
    log::debug!(
        "분해 완료: {}자 -> {}자",
        input.chars().count(),
        output.chars().count()
    );

    if json_output {
        let record = UnpackRecord {
            input: &input,
            output: &output,
        };
        match serde_json::to_string(&record) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                log::error!("JSON 직렬화 실패: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        println!("{}", output);
    }
}

fn print_usage() {
    println!("사용법: hanpul [--json] [텍스트...]");
    println!("  텍스트 인자가 없으면 표준 입력을 읽습니다.");
    println!("  --json  입력/출력을 JSON 한 줄로 출력");
}

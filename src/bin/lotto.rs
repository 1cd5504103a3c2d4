use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use meal_tracker_rs::interface::display_draws;
use meal_tracker_rs::lotto::{draw_many, write_csv, write_json};

#[derive(Parser, Debug)]
#[command(name = "lotto")]
#[command(about = "1부터 45까지 서로 다른 번호 6개를 추첨합니다")]
struct Args {
    /// 추첨 횟수
    #[arg(short = 'n', long, default_value = "1")]
    count: usize,

    /// 같은 결과를 재현하기 위한 시드
    #[arg(long)]
    seed: Option<u64>,

    /// 추첨 결과를 CSV 파일로 저장
    #[arg(long)]
    csv: Option<PathBuf>,

    /// 추첨 결과와 공 색상을 JSON 파일로 저장
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let draws = draw_many(&mut rng, args.count);
    display_draws(&draws);

    if let Some(path) = &args.csv {
        if let Err(e) = write_csv(&draws, path) {
            eprintln!("CSV 저장 오류: {}", e);
            std::process::exit(1);
        }
        println!("{}회 추첨 결과를 {}에 저장했습니다", draws.len(), path.display());
    }

    if let Some(path) = &args.json {
        if let Err(e) = write_json(&draws, path) {
            eprintln!("JSON 저장 오류: {}", e);
            std::process::exit(1);
        }
        println!("{}회 추첨 결과를 {}에 저장했습니다", draws.len(), path.display());
    }
}

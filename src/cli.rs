use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::Gender;

/// 오늘의 식사를 기록하고 권장 섭취량과 비교합니다.
#[derive(Parser, Debug)]
#[command(name = "meal_tracker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// userInfo.json과 todaysMeals.json을 저장할 디렉터리.
    #[arg(short, long, global = true, env = "MEAL_TRACKER_DATA_DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// 디버그 로그를 stderr에 출력합니다.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// 오늘의 식사 목록을 보여줍니다.
    #[default]
    List,

    /// 영양 정보가 있는 음식 목록을 보여줍니다.
    Foods,

    /// 키, 몸무게, 나이, 성별을 저장합니다. 빠진 값은 입력을 요청합니다.
    Profile {
        /// 키 (cm).
        #[arg(long)]
        height: Option<f64>,

        /// 몸무게 (kg).
        #[arg(long)]
        weight: Option<f64>,

        /// 나이.
        #[arg(long)]
        age: Option<f64>,

        /// male 또는 female.
        #[arg(long)]
        gender: Option<Gender>,
    },

    /// 음식 100g을 추가합니다.
    Add {
        /// `foods` 목록에 있는 음식 이름. 생략하면 입력을 요청합니다.
        food: Option<String>,
    },

    /// `list`에 표시된 번호의 식사를 삭제합니다.
    Remove {
        /// 1부터 시작하는 번호.
        index: usize,
    },

    /// 오늘의 섭취량을 권장량과 비교합니다.
    Report,

    /// 오늘의 식사 기록을 모두 삭제합니다.
    Clear {
        /// 확인 없이 삭제합니다.
        #[arg(short, long)]
        yes: bool,
    },
}

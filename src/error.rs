use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("먼저 설정에서 키, 몸무게, 나이를 입력해주세요")]
    ProfileIncomplete,

    #[error("'{name}'에 대한 영양 정보를 찾을 수 없습니다. 간단한 음식(예: {})을 입력해보세요", suggestions.join(", "))]
    FoodNotFound {
        name: String,
        suggestions: Vec<String>,
    },

    #[error("{}번 식사가 없습니다 (기록 {len}개)", index + 1)]
    IndexOutOfRange { index: usize, len: usize },

    #[error("권장 칼로리가 0 이하라 섭취량을 비교할 수 없습니다")]
    ZeroCalorieTarget,

    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON 오류: {0}")]
    Json(#[from] serde_json::Error),

    #[error("입력 오류: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV 오류: {0}")]
    Csv(#[from] csv::Error),

    #[error("잘못된 입력: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, TrackerError>;

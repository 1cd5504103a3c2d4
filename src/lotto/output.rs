use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::lotto::draw::Draw;

/// Write draws to a CSV file, one row per draw.
pub fn write_csv(draws: &[Draw], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["draw", "n1", "n2", "n3", "n4", "n5", "n6"])?;

    for (i, d) in draws.iter().enumerate() {
        let mut record = vec![(i + 1).to_string()];
        record.extend(d.numbers().iter().map(u8::to_string));
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write draws to a JSON file with each ball's colour.
pub fn write_json(draws: &[Draw], path: &Path) -> Result<()> {
    let json = serde_json::json!({
        "draws": draws.iter().map(|d| {
            serde_json::json!({
                "numbers": d,
                "colors": d.balls().iter().map(|b| b.hsl()).collect::<Vec<_>>(),
            })
        }).collect::<Vec<_>>(),
    });

    fs::write(path, serde_json::to_string_pretty(&json)?)?;
    Ok(())
}

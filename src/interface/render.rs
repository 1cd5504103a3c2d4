use crate::lotto::Draw;
use crate::models::{Food, MealEntry, UserProfile};
use crate::nutrition::DailyReport;

/// Display today's meals with 1-based positions for `remove`.
pub fn display_meals(meals: &[MealEntry]) {
    if meals.is_empty() {
        println!("오늘 기록된 식사가 없습니다.");
        return;
    }

    println!();
    println!("=== 오늘의 식사 ({}개) ===", meals.len());
    println!();

    for (i, meal) in meals.iter().enumerate() {
        println!("{:>3}. {} (100g)", i + 1, meal.name);
        println!(
            "     Cal: {}, C: {}g, P: {}g, F: {}g",
            meal.calories, meal.carbs, meal.protein, meal.fat
        );
    }

    println!();
}

/// Display the built-in food table.
pub fn display_food_table() {
    println!();
    println!("=== 음식 목록 (100g 기준) ===");
    println!();

    for food in Food::ALL {
        let m = food.macros();
        println!(
            "  {} - Cal: {}, C: {}g, P: {}g, F: {}g",
            food.name(),
            m.calories,
            m.carbs,
            m.protein,
            m.fat
        );
    }

    println!();
}

/// Display a saved profile.
pub fn display_profile(profile: &UserProfile) {
    let show = |v: Option<f64>| v.map_or_else(|| "-".to_string(), |v| v.to_string());

    println!(
        "키: {} cm, 몸무게: {} kg, 나이: {}, 성별: {}",
        show(profile.height),
        show(profile.weight),
        show(profile.age),
        profile.gender.label()
    );
}

/// Display intake against the recommendation.
pub fn display_report(report: &DailyReport) {
    let t = &report.totals;
    let r = &report.recommended;

    println!();
    println!("=== 오늘의 영양 섭취 분석 ===");
    println!();
    println!("총 섭취 칼로리: {:.0} / {:.0} kcal", t.calories, r.calories);
    println!("총 탄수화물: {:.1} / {:.0} g", t.carbs, r.carbs);
    println!("총 단백질: {:.1} / {:.0} g", t.protein, r.protein);
    println!("총 지방: {:.1} / {:.0} g", t.fat, r.fat);
    println!();
    println!("{}", report.feedback.message());
    println!();
}

/// Display a set of draws with each ball's colour.
pub fn display_draws(draws: &[Draw]) {
    for (i, d) in draws.iter().enumerate() {
        let balls: Vec<String> = d
            .balls()
            .iter()
            .map(|b| format!("{:>2} [{}]", b.number, b.hsl()))
            .collect();

        if draws.len() > 1 {
            println!("{:>3}. {}", i + 1, balls.join("  "));
        } else {
            println!("{}", balls.join("  "));
        }
    }
}

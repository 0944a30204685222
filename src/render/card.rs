use crate::domain::model::{ToolData, WeekData};
use crate::render::{section_title, wrap, CARD_WIDTH};

pub fn render_week_card(week: &WeekData) -> String {
    let rule = "─".repeat(CARD_WIDTH);
    let mut out = format!("┌{}\n", rule);
    out.push_str(&format!(
        "│ Hafta {:>2} · [{}] {}\n",
        week.week_number, week.category, week.title
    ));
    out.push_str(&format!("├{}\n", rule));

    for line in wrap(&week.description, CARD_WIDTH - 2) {
        out.push_str(&format!("│ {}\n", line));
    }

    if !week.learning_objectives.is_empty() {
        out.push_str("│\n│ Öğrenme Hedefleri:\n");
        for objective in &week.learning_objectives {
            for (i, line) in wrap(objective, CARD_WIDTH - 6).iter().enumerate() {
                let bullet = if i == 0 { "•" } else { " " };
                out.push_str(&format!("│   {} {}\n", bullet, line));
            }
        }
    }

    out.push_str("│\n│ Uygulamalı Görev:\n");
    for line in wrap(&week.practical_task, CARD_WIDTH - 4) {
        out.push_str(&format!("│   {}\n", line));
    }
    out.push_str(&format!("│ Önerilen Okuma: {}\n", week.recommended_reading));
    out.push_str(&format!("└{}\n", rule));
    out
}

pub fn render_tool_card(tool: &ToolData) -> String {
    let mut out = format!("  ▸ {} [{}]\n", tool.name, tool.category);
    for line in wrap(&tool.description, CARD_WIDTH - 4) {
        out.push_str(&format!("    {}\n", line));
    }
    out
}

pub fn render_tools_section(tools: &[ToolData]) -> String {
    let mut out = section_title("🛠", "Araçlar ve Teknolojiler");
    for tool in tools {
        out.push_str(&render_tool_card(tool));
    }
    out
}

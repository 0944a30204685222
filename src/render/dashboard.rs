use crate::core::shell::Shell;
use crate::domain::model::SyllabusData;
use crate::render::{card, section_title, stats, wrap, CARD_WIDTH};

pub const APP_TITLE: &str = "İK Analitiği";
pub const APP_SUBTITLE: &str = "3. Sınıf Lisans Programı";
pub const REFRESH_LABEL: &str = "[r] Programı Yenile";
pub const REFRESH_BUSY_LABEL: &str = "⏳ Oluşturuluyor...";
pub const SPINNER_TITLE: &str = "Yapay Zeka Müfredatı Hazırlıyor...";
pub const SPINNER_HINT: &str = "Lütfen bekleyin, 14 haftalık plan oluşturuluyor.";
pub const FOOTER: &str = "Gemini 2.5 Flash ile Oluşturulmuştur";

fn render_header(refresh_enabled: bool) -> String {
    let control = if refresh_enabled {
        REFRESH_LABEL
    } else {
        REFRESH_BUSY_LABEL
    };
    let rule = "━".repeat(CARD_WIDTH);

    format!("{rule}\n🎓 {APP_TITLE}\n   {APP_SUBTITLE:<52}{control}\n{rule}\n")
}

fn render_error_banner(message: &str) -> String {
    format!("\n⚠  {}\n", message)
}

fn render_spinner() -> String {
    format!("\n   ◌ {}\n     {}\n", SPINNER_TITLE, SPINNER_HINT)
}

/// Course header, stats, tools and weekly cards for one syllabus.
pub fn render_syllabus(data: &SyllabusData) -> String {
    let mut out = format!("\n{}\n", data.course_title);
    for line in wrap(&data.course_description, CARD_WIDTH) {
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str(&format!(
        "\nAraç sayısı: {} · Hafta sayısı: {}\n",
        data.tools.len(),
        data.weeks.len()
    ));

    out.push_str(&stats::render_stats(&stats::CourseStats::from_weeks(
        &data.weeks,
    )));
    out.push_str(&card::render_tools_section(&data.tools));

    out.push_str(&section_title("📚", "Haftalık Program Detayı"));
    for week in &data.weeks {
        out.push_str(&card::render_week_card(week));
    }
    out
}

/// Full screen for the current shell state.
pub fn render_dashboard(shell: &Shell) -> String {
    let mut out = render_header(shell.refresh_enabled());

    if let Some(message) = shell.error_message() {
        out.push_str(&render_error_banner(message));
    }

    if shell.show_spinner() {
        out.push_str(&render_spinner());
    }

    if shell.show_dashboard() {
        if let Some(data) = shell.data() {
            out.push_str(&render_syllabus(data));
        }
    }

    out.push_str(&format!("\n{:^width$}\n", FOOTER, width = CARD_WIDTH));
    out
}

use crate::domain::model::{WeekCategory, WeekData};
use crate::render::{bar, section_title};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseStats {
    pub total_weeks: usize,
    /// Always one entry per category, in `WeekCategory::ALL` order.
    pub by_category: Vec<(WeekCategory, usize)>,
    pub total_objectives: usize,
}

impl CourseStats {
    pub fn from_weeks(weeks: &[WeekData]) -> Self {
        let by_category = WeekCategory::ALL
            .iter()
            .map(|category| {
                let count = weeks.iter().filter(|w| w.category == *category).count();
                (*category, count)
            })
            .collect();

        Self {
            total_weeks: weeks.len(),
            by_category,
            total_objectives: weeks.iter().map(|w| w.learning_objectives.len()).sum(),
        }
    }

    pub fn count(&self, category: WeekCategory) -> usize {
        self.by_category
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    /// Practice + Tools share of all weeks, in whole percent.
    pub fn hands_on_percent(&self) -> usize {
        if self.total_weeks == 0 {
            return 0;
        }
        let hands_on = self.count(WeekCategory::Practice) + self.count(WeekCategory::Tools);
        hands_on * 100 / self.total_weeks
    }
}

pub fn render_stats(stats: &CourseStats) -> String {
    let mut out = section_title("📊", "Ders İstatistikleri");
    out.push_str(&format!(
        "  Toplam Hafta: {}   Öğrenme Hedefi: {}   Uygulamalı Oran: %{}\n",
        stats.total_weeks,
        stats.total_objectives,
        stats.hands_on_percent()
    ));

    for (category, count) in &stats.by_category {
        out.push_str(&format!(
            "  {:<9} {} {}\n",
            category.label(),
            bar(*count, stats.total_weeks, 28),
            count
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week(n: u32, category: WeekCategory, objectives: usize) -> WeekData {
        WeekData {
            week_number: n,
            title: format!("Hafta {}", n),
            category,
            description: String::new(),
            learning_objectives: (0..objectives).map(|i| format!("Hedef {}", i)).collect(),
            practical_task: String::new(),
            recommended_reading: String::new(),
        }
    }

    #[test]
    fn test_breakdown_sums_to_week_count() {
        let weeks: Vec<WeekData> = (1..=14)
            .map(|n| week(n, WeekCategory::ALL[(n as usize) % 4], 3))
            .collect();

        let stats = CourseStats::from_weeks(&weeks);

        assert_eq!(stats.total_weeks, 14);
        assert_eq!(stats.by_category.len(), 4);
        assert_eq!(stats.by_category.iter().map(|(_, n)| n).sum::<usize>(), 14);
        assert_eq!(stats.total_objectives, 42);
    }

    #[test]
    fn test_empty_weeks() {
        let stats = CourseStats::from_weeks(&[]);
        assert_eq!(stats.total_weeks, 0);
        assert_eq!(stats.hands_on_percent(), 0);
        assert!(stats.by_category.iter().all(|(_, n)| *n == 0));
    }

    #[test]
    fn test_hands_on_percent() {
        let weeks = vec![
            week(1, WeekCategory::Theory, 1),
            week(2, WeekCategory::Practice, 1),
            week(3, WeekCategory::Tools, 1),
            week(4, WeekCategory::Ethics, 1),
        ];
        assert_eq!(CourseStats::from_weeks(&weeks).hands_on_percent(), 50);
    }

    #[test]
    fn test_render_lists_every_category() {
        let stats = CourseStats::from_weeks(&[week(1, WeekCategory::Ethics, 2)]);
        let rendered = render_stats(&stats);

        for category in WeekCategory::ALL {
            assert!(rendered.contains(category.label()));
        }
        assert!(rendered.contains("Toplam Hafta: 1"));
    }
}

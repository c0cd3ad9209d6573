use std::collections::HashMap;

use salary_analyzer::LanguageAggregate;

pub const HEADER: [&str; 4] = [
    "Язык программирования",
    "Вакансий найдено",
    "Вакансий обработано",
    "Средняя зарплата",
];

const MISSING_AVERAGE: &str = "n/a";

/// Render the aggregates as a boxed ascii table, one row per language in the given order.
pub fn build_table(
    title: &str,
    stats: &HashMap<String, LanguageAggregate>,
    languages: &[&str],
) -> String {
    let mut rows = vec![HEADER.map(String::from)];
    for language in languages {
        let Some(aggregate) = stats.get(*language) else {
            log::warn!("no statistics for {} in table {}", language, title);
            continue;
        };
        rows.push([
            language.to_string(),
            aggregate.vacancies_found.to_string(),
            aggregate.vacancies_processed.to_string(),
            aggregate
                .average_salary
                .map(|salary| salary.to_string())
                .unwrap_or_else(|| MISSING_AVERAGE.to_owned()),
        ]);
    }

    let mut widths = [0; 4];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = widths
        .iter()
        .map(|width| "-".repeat(width + 2))
        .collect::<Vec<_>>()
        .join("+");
    let border = format!("+{}+", border);

    let mut lines = Vec::with_capacity(rows.len() + 3);
    lines.push(titled_border(&border, title));
    for (i, row) in rows.iter().enumerate() {
        let cells = row
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!(" {}{} ", cell, " ".repeat(width - cell.chars().count())))
            .collect::<Vec<_>>()
            .join("|");
        lines.push(format!("|{}|", cells));
        if i == 0 {
            lines.push(border.clone());
        }
    }
    lines.push(border);
    lines.join("\n")
}

/// The title replaces the start of the top border, it is dropped when it does not fit.
fn titled_border(border: &str, title: &str) -> String {
    let title_len = title.chars().count();
    if title.is_empty() || title_len + 2 > border.len() {
        return border.to_owned();
    }
    format!("+{}{}", title, &border[title_len + 1..])
}

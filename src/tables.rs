use comfy_table::{Attribute, Cell, CellAlignment, Table, modifiers, presets};

use crate::estimator::{ChargeEstimate, PhaseEstimate, curve::ChargeCurve};

#[must_use]
pub fn build_estimate_table(estimate: &ChargeEstimate) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_header(vec!["Параметр", "Значение"]);

    table.add_row(vec![
        Cell::new("Общая энергоёмкость АКБ"),
        value_cell(estimate.total_energy),
    ]);
    table.add_row(vec![
        Cell::new("Энергия для заряда (DoD)"),
        value_cell(estimate.needed_energy),
    ]);
    add_phase_rows(&mut table, "CC", &estimate.cc);
    add_phase_rows(&mut table, "CV", &estimate.cv);
    table.add_row(vec![
        Cell::new("Общее время заряда").add_attribute(Attribute::Bold),
        value_cell(estimate.total_time).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Общий расход топлива").add_attribute(Attribute::Bold),
        value_cell(estimate.total_fuel).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Время автономной работы"),
        value_cell(estimate.autonomy_time),
    ]);
    table
}

fn add_phase_rows(table: &mut Table, phase: &str, estimate: &PhaseEstimate) {
    table.add_row(vec![
        Cell::new(format!("Мощность заряда ({phase})")),
        value_cell(estimate.charge_power),
    ]);
    table.add_row(vec![
        Cell::new(format!("Потребление от генератора ({phase})")),
        value_cell(estimate.generator_draw),
    ]);
    table.add_row(vec![
        Cell::new(format!("Время заряда ({phase})")),
        value_cell(estimate.time),
    ]);
    table.add_row(vec![
        Cell::new(format!("Расход топлива ({phase})")),
        value_cell(estimate.fuel),
    ]);
}

#[must_use]
pub fn build_curve_table(curve: &ChargeCurve) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_header(vec!["Сегмент", "Время", "Напряжение"]);
    for (segment, points) in [("CC", &curve.cc), ("CV", &curve.cv)] {
        for point in points {
            table.add_row(vec![
                Cell::new(segment),
                value_cell(point.time),
                value_cell(point.voltage),
            ]);
        }
    }
    table
}

fn value_cell(value: impl std::fmt::Display) -> Cell {
    Cell::new(value).set_alignment(CellAlignment::Right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::{ChargeInputs, estimate};

    #[test]
    fn estimate_table_has_a_row_per_field() {
        let estimate = estimate(&ChargeInputs::default()).unwrap();
        // 13 fields + header.
        assert_eq!(build_estimate_table(&estimate).lines().count(), 14 + 3);
    }

    #[test]
    fn curve_table_has_a_row_per_sample() {
        let estimate = estimate(&ChargeInputs::default()).unwrap();
        assert_eq!(build_curve_table(&estimate.curve).lines().count(), 5 + 3);
    }
}

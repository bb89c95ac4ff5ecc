use crate::core::emission::factor_table;
use crate::errors::AppResult;
use crate::utils::table::{Column, Table};

pub fn handle() -> AppResult<()> {
    let mut table = Table::new(vec![
        Column::left("CODE"),
        Column::left("CATEGORY"),
        Column::right("KG/UNIT"),
        Column::right("KG/HOUR"),
    ]);

    for (cat, f) in factor_table() {
        table.add_row(vec![
            cat.code().to_string(),
            cat.label().to_string(),
            format!("{:.3}/{}", f.per_unit_kg, f.unit),
            format!("{:.3}", f.per_hour_kg),
        ]);
    }

    print!("{}", table.render());
    Ok(())
}

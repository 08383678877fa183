//! Компонент ячейки таблицы для денежных значений
//!
//! ```ignore
//! <TableCellMoney value=item.fund_vv />
//! ```

use super::number_format::format_amount;
use leptos::prelude::*;
use thaw::*;

/// Сумма с разделителем тысяч, выровненная по правому краю;
/// пустая или нулевая сумма показывается как «—»
#[component]
pub fn TableCellMoney(
    /// Значение для отображения
    value: Option<f64>,
) -> impl IntoView {
    view! {
        <TableCell class="text-end">
            <span>{format_amount(value)}</span>
        </TableCell>
    }
}

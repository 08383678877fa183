//! Утилиты форматирования чисел для таблиц (русская локаль)

/// Разделитель тысяч: неразрывный пробел, как у `toLocaleString("ru-RU")`
pub const THOUSANDS_SEPARATOR: char = '\u{a0}';

/// Заглушка для пустых и нулевых сумм
pub const EMPTY_AMOUNT: &str = "—";

/// Форматирует число с разделителем тысяч и не более чем `max_decimals`
/// знаками после запятой; хвостовые нули дробной части отбрасываются
///
/// # Примеры
///
/// ```
/// use frontend::shared::components::table::format_number_ru;
/// assert_eq!(format_number_ru(1234.5, 3), "1\u{a0}234,5");
/// ```
pub fn format_number_ru(value: f64, max_decimals: u8) -> String {
    let formatted = format!("{:.*}", max_decimals as usize, value);

    // Разделяем целую и дробную части
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, dec.trim_end_matches('0')),
        None => (formatted.as_str(), ""),
    };

    // Вставляем разделитель каждые 3 цифры с конца целой части
    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push(THOUSANDS_SEPARATOR);
        }
        result.push(*c);
    }

    // Переворачиваем обратно
    let formatted_integer = result.chars().rev().collect::<String>();

    if decimal_part.is_empty() {
        formatted_integer
    } else {
        format!("{},{}", formatted_integer, decimal_part)
    }
}

/// Денежное значение ячейки: «—», если суммы нет или она нулевая
///
/// # Примеры
///
/// ```
/// use frontend::shared::components::table::format_amount;
/// assert_eq!(format_amount(Some(1500000.0)), "1\u{a0}500\u{a0}000");
/// assert_eq!(format_amount(None), "—");
/// ```
pub fn format_amount(value: Option<f64>) -> String {
    match value {
        Some(v) if v != 0.0 => format_number_ru(v, 3),
        _ => EMPTY_AMOUNT.to_string(),
    }
}

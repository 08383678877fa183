/// Сколько страниц показывается по обе стороны от текущей
pub const PAGE_WINDOW: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageTokenKind {
    Prev,
    Page,
    Ellipsis,
    Next,
}

/// Элемент пагинатора
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageToken {
    pub kind: PageTokenKind,
    /// Номер страницы для `Page`, целевая страница для активных `Prev`/`Next`
    pub page: Option<usize>,
    pub disabled: bool,
    pub active: bool,
}

impl PageToken {
    fn page(page: usize, current: usize) -> Self {
        Self {
            kind: PageTokenKind::Page,
            page: Some(page),
            disabled: false,
            active: page == current,
        }
    }

    fn ellipsis() -> Self {
        Self {
            kind: PageTokenKind::Ellipsis,
            page: None,
            disabled: true,
            active: false,
        }
    }

    fn step(kind: PageTokenKind, target: Option<usize>) -> Self {
        Self {
            kind,
            page: target,
            disabled: target.is_none(),
            active: false,
        }
    }
}

/// Раскладка пагинатора для текущей страницы
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationView {
    pub current: usize,
    pub total_pages: usize,
    pub tokens: Vec<PageToken>,
}

impl PaginationView {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Номера страниц в порядке вывода
    pub fn page_numbers(&self) -> Vec<usize> {
        self.tokens
            .iter()
            .filter(|t| t.kind == PageTokenKind::Page)
            .filter_map(|t| t.page)
            .collect()
    }

    /// «3 из 10»; пусто, когда пагинатор не показывается
    pub fn page_info(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!("{} из {}", self.current, self.total_pages)
        }
    }
}

/// Первая и последняя страницы видны всегда, вокруг текущей окно ±2.
/// Разрыв заменяется многоточием, если край дальше трёх страниц от текущей.
/// При одной странице и меньше пагинатор не показывается.
pub fn paginate(current: usize, total_pages: usize) -> PaginationView {
    if total_pages <= 1 {
        return PaginationView {
            current,
            total_pages,
            tokens: Vec::new(),
        };
    }

    let mut tokens = Vec::with_capacity(2 * PAGE_WINDOW + 5);

    let prev = if current > 1 { Some(current - 1) } else { None };
    tokens.push(PageToken::step(PageTokenKind::Prev, prev));

    for i in 1..=total_pages {
        if i == 1 || i == total_pages || i.abs_diff(current) <= PAGE_WINDOW {
            tokens.push(PageToken::page(i, current));
        } else if (i + PAGE_WINDOW + 1 == current && current > PAGE_WINDOW + 2)
            || (current.checked_add(PAGE_WINDOW + 1) == Some(i) && i < total_pages)
        {
            tokens.push(PageToken::ellipsis());
        }
    }

    let next = if current < total_pages {
        Some(current + 1)
    } else {
        None
    };
    tokens.push(PageToken::step(PageTokenKind::Next, next));

    PaginationView {
        current,
        total_pages,
        tokens,
    }
}

use leptos::prelude::*;

/// SVG-иконка по имени; неизвестное имя — пустое место той же ширины
pub fn icon(name: &str) -> AnyView {
    let path: &'static str = match name {
        "plus" => "M12 5v14M5 12h14",
        "x" => "M18 6 6 18M6 6l12 12",
        "delete" => "M3 6h18M8 6V4h8v2M19 6l-1 14H6L5 6",
        "edit" => "M12 20h9M16.5 3.5a2.1 2.1 0 0 1 3 3L7 19l-4 1 1-4Z",
        "save" => "M19 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h11l5 5v11a2 2 0 0 1-2 2zM17 21v-8H7v8M7 3v5h8",
        "sync" => "M21 12a9 9 0 0 1-15.5 6.2L3 16M3 12a9 9 0 0 1 15.5-6.2L21 8M21 3v5h-5M3 21v-5h5",
        "accounting" => "M4 4h16v16H4zM4 9h16M9 4v16",
        "projects" => "M3 7h18v13H3zM8 7V4h8v3",
        "banking" => "M3 21h18M5 10v8M9 10v8M15 10v8M19 10v8M12 3 3 8h18z",
        "purchasing" => "M6 2 3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4zM3 6h18M16 10a4 4 0 0 1-8 0",
        "sales" => "M3 3v18h18M7 14l4-4 4 4 5-5",
        "administration" => "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8zM22 21v-2a4 4 0 0 0-3-3.9M16 3.1a4 4 0 0 1 0 7.8",
        _ => "",
    };

    view! {
        <svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            <path d=path />
        </svg>
    }
    .into_any()
}

//! Shared Tailwind class constants to ensure visual consistency across forms
//! and cards.

pub struct Theme;

impl Theme {
    /// Standard text/select input style shared by every form in the app.
    pub const INPUT: &'static str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-blue-500 dark:focus:border-blue-500";

    /// Form field label.
    pub const LABEL: &'static str =
        "block mb-2 text-sm font-medium text-gray-900 dark:text-white";

    /// Card container used on dashboard and admin pages.
    pub const CARD: &'static str = "p-6 bg-white dark:bg-gray-800 rounded-xl border border-gray-200 dark:border-gray-700 shadow-sm";

    /// Page heading.
    pub const TITLE: &'static str = "text-2xl font-semibold text-gray-900 dark:text-white";

    /// Muted helper text under a heading.
    pub const SUBTLE: &'static str = "text-sm text-gray-500 dark:text-gray-400";

    /// Small red text action (delete buttons in lists).
    pub const DANGER_LINK: &'static str =
        "text-sm font-medium text-red-600 hover:text-red-800 dark:text-red-400";
}

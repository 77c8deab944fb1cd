pub const CONTAINER: &str = "min-h-screen flex flex-col bg-gray-50 dark:bg-gray-900 w-full";
pub const NAV: &str = "sticky top-0 z-10 w-full bg-white/60 dark:bg-gray-700/60 backdrop-blur-md border-b border-gray-200/50 dark:border-gray-700/50";
pub const NAV_INNER: &str = "mx-auto max-w-6xl px-4 py-3 flex items-center justify-between";
pub const NAV_ITEMS: &str = "flex items-center gap-2";
pub const GRID: &str = "mx-auto max-w-6xl p-4 grid gap-4 grid-cols-1 md:grid-cols-2 lg:grid-cols-3 w-full";
pub const CARD: &str = "bg-white/50 dark:bg-black/20 border rounded-lg p-4";
pub const BUTTON_PRIMARY: &str = "px-4 py-2 rounded bg-gray-900 dark:bg-white text-white dark:text-gray-900 text-sm font-medium hover:opacity-90 focus:outline-none focus:ring-2 focus:ring-offset-2";
pub const BUTTON_SECONDARY: &str = "px-3 py-2 rounded border text-sm hover:bg-gray-900/5 focus:outline-none focus:ring-2 focus:ring-offset-2";
pub const BUTTON_SMALL: &str = "px-2 py-1 rounded border text-sm disabled:opacity-50";
pub const SELECT: &str = "border rounded px-2 py-2 text-sm";
pub const INPUT: &str = "border rounded px-2 py-1 text-sm w-[260px]";
pub const TEXTAREA: &str = "w-full min-h-[120px] rounded border p-2 text-sm focus:outline-none focus:ring-2";
pub const TEXTAREA_ERROR: &str = "w-full min-h-[120px] rounded border border-red-500 p-2 text-sm focus:outline-none focus:ring-2 focus:ring-red-500";
pub const TEXT_H1: &str = "text-xl font-semibold text-gray-900 dark:text-white";
pub const TEXT_H2: &str = "text-base font-semibold text-gray-900 dark:text-white";
pub const TEXT_LABEL: &str = "block text-sm font-medium text-gray-900 dark:text-white";
pub const TEXT_ERROR: &str = "text-sm text-red-600 dark:text-red-400";
pub const TEXT_BODY: &str = "text-sm text-gray-600 dark:text-gray-300";
pub const LINK: &str = "text-blue-600 dark:text-blue-400 hover:text-blue-700 dark:hover:text-blue-300 transition-colors duration-200";

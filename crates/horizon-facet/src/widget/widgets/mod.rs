//! Owner-draw widgets.
//!
//! - [`Button`]: push or toggle button, optionally in a selection group
//! - [`ScrollBar`]: custom scroll bar drawn over native scrollable controls
//! - [`ListBox`], [`RichTextBox`], [`DataGrid`], [`NavMenu`]: scrollable
//!   content widgets with linked scroll bars
//! - [`ComboBox`] with its [`PopupForm`] drop-down
//! - [`TabControl`]
//! - [`Pagination`]: page-number strip over a paged data set

mod button;
mod combo_box;
mod data_grid;
mod list_box;
mod nav_menu;
mod pagination;
mod popup_form;
mod rich_text_box;
mod scroll_bar;
mod tab_control;

pub use button::Button;
pub use combo_box::ComboBox;
pub use data_grid::{DataGrid, GridColumn};
pub use list_box::{DEFAULT_ITEM_HEIGHT, ListBox};
pub use nav_menu::{NavMenu, NavNode, NavPath, NavRow};
pub use pagination::{DEFAULT_PAGE_SIZE, PageChange, Pagination};
pub use popup_form::PopupForm;
pub use rich_text_box::RichTextBox;
pub use scroll_bar::ScrollBar;
pub use tab_control::TabControl;

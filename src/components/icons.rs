//! Centralized icon definitions for the interface chrome.

use icondata::Icon;

pub const SEARCH: Icon = icondata::BsSearch;
pub const SORT_ASC: Icon = icondata::BsCaretUpFill;
pub const SORT_DESC: Icon = icondata::BsCaretDownFill;
/// Shown next to headers that are not sorted.
pub const SORT_NONE: Icon = icondata::BsChevronExpand;
pub const WARNING: Icon = icondata::BsExclamationTriangleFill;
pub const EXTERNAL_LINK: Icon = icondata::BsBoxArrowUpRight;

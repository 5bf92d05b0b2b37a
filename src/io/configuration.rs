//! Output naming and display defaults

// Output naming
/// Extension of every written image
pub const OUTPUT_EXTENSION: &str = "png";
/// Suffix added to expanded autotile filenames
pub const EXPANDED_SUFFIX: &str = "_expanded";
/// Suffix of extracted water tiles, followed by their index
pub const WATER_SUFFIX: &str = "_w";
/// Suffix of the extracted animated tile block
pub const ANIMATED_SUFFIX: &str = "_an";
/// Suffix of extracted terrain autotiles, followed by their index
pub const AUTOTILE_SUFFIX: &str = "_at";
/// Suffix of the lower decoration sheet
pub const LOW_DECO_SUFFIX: &str = "_lo";
/// Suffix of the upper decoration sheet
pub const HIGH_DECO_SUFFIX: &str = "_hi";

// Hints logged next to dimension errors
/// Explains where a valid chipset comes from
pub const CHIPSET_SIZE_HINT: &str = "Please refer to chipset formatting from RPG Maker 200x.";
/// Explains where a valid autotile comes from
pub const AUTOTILE_SIZE_HINT: &str =
    "Please extract autotiles from an RPG Maker 200x chipset with the extract command first.";

// Progress bar display
/// Template of the batch progress bar
pub const PROGRESS_TEMPLATE: &str = "[{elapsed_precise}] {msg} [{bar:40.cyan/blue}] {pos}/{len}";

//! Shared tokens and format markers.
//! Anything the classifier, the writers and the tests need to agree on lives here.

/// Token for structures with no keystroke encoding (or an unrecognized sub-type).
pub const UNSUPPORTED: &str = "~";

/// Token for a stockpile anchor configured with more than one category.
pub const AMBIGUOUS_STOCKPILE: &str = "?";

/// Continuation placeholder for non-anchor footprint tiles in the minimal layout.
pub const PLACEHOLDER_MINIMAL: &str = "`";

/// Continuation placeholder for non-anchor footprint tiles in the pretty layout.
pub const PLACEHOLDER_PRETTY: &str = "";

/// Cell text written by the pretty layout where no token was recorded.
pub const BLANK_CELL: &str = " ";

/// Cell separator used by both layouts.
pub const CELL_SEPARATOR: char = ',';

/// Row terminator used by the pretty layout.
pub const ROW_TERMINATOR: &str = "#";

/// Layer separator when the scan moves toward higher z (positive depth).
pub const LAYER_SEPARATOR_ASCENDING: &str = "#<";

/// Layer separator when the scan moves toward lower z (negative depth).
pub const LAYER_SEPARATOR_DESCENDING: &str = "#>";

/// Track stop friction settings, lowest first. A matching friction appends
/// one marker for its own tier and one for every tier after it.
pub const FRICTION_LADDER: [u32; 4] = [10, 50, 500, 10000];

/// Marker appended once per friction tier.
pub const FRICTION_MARKER: char = 'a';

/// Marker appended for each step of a track stop dump configuration.
pub const DUMP_MARKER: char = 'd';

/// Token emitted by the query phase for tiles inside a room.
pub const ROOM_TOKEN: &str = "r+";

/// Default root directory for generated blueprint files.
pub const DEFAULT_OUTPUT_DIR: &str = "blueprints";

/// File extension of generated blueprint files.
pub const BLUEPRINT_EXTENSION: &str = "csv";

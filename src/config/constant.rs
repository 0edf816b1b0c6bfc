/// Styles offered by the client's style selector. Any non-empty style
/// string is still accepted by the generation endpoints.
pub const PREDEFINED_STYLES: [&str; 6] = [
    "Modern",
    "Classic",
    "Luxury",
    "Minimalist",
    "Industrial",
    "Bohemian",
];

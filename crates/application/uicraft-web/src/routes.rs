//! Route definitions for the web GUI

/// All routes defined in the application
pub const ROUTES: &[(&str, &str, &str)] = &[
    // Page routes
    ("GET", "/", "Generator page"),
    ("POST", "/interact", "Apply widgets and run one refresh cycle"),
    ("GET", "/preview", "Preview fragment (?mode=desktop|mobile)"),
    ("GET", "/download", "Current markup as generated_ui.html"),

    // API routes
    ("GET", "/api/health", "Health check"),

    // Static assets
    ("GET", "/static/style.css", "CSS stylesheet"),
];

/// Print all routes
pub fn print_routes() {
    println!("\nuicraft Web Routes:");
    println!("{:-<60}", "");
    for (method, path, desc) in ROUTES {
        println!("{:6} {:20} {}", method, path, desc);
    }
    println!();
}

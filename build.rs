const COMMANDS: &[&str] = &[
    "list_dogs",
    "add_dog",
    "remove_dog",
    "toggle_favorite",
    "search_dogs",
    "get_counts",
];

fn main() {
    tauri_plugin::Builder::new(COMMANDS).build();
}

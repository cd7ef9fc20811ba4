const COMMANDS: &[&str] = &[
  "begin_share",
  "list_targets",
  "dispatch",
  "cancel_share",
  "locale_strings",
  "cleanup",
];

fn main() {
  tauri_plugin::Builder::new(COMMANDS).build();
}

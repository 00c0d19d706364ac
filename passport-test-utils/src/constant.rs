/// Folder of the fake game installation inside the test root
pub static GAME_DIR: &str = "game";
/// Passport state directory inside the test root
pub static CONFIG_DIR: &str = "config";
/// Static artwork root inside the test root
pub static STATIC_DIR: &str = "static";
/// Locale file holding an asset's English name
pub static LOCALE_FILE: &str = "info.locale=eng.txt";
/// Aircraft every factory sortie is flown in
pub static DEFAULT_SORTIE_MODEL: &str = "LuaScripts/WorldObjects/Planes/yak1s69.txt";

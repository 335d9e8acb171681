//! ブラウザコンソールへのログ出力

pub fn info(message: &str) {
    gloo::console::log!(message);
}

pub fn warn(message: &str) {
    gloo::console::warn!(message);
}

pub fn error(message: &str) {
    gloo::console::error!(message);
}

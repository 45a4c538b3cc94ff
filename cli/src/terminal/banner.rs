use colored::*;

use crate::terminal::print;

const BANNER: &str = r#"
                  _
            _ __ | |__  _ __ _ __ ___   __ _ _ __
           | '_ \| '_ \| '__| '_ ` _ \ / _` | '_ \
           | | | | |_) | |  | | | | | | (_| | |_) |
           |_| |_|_.__/|_|  |_| |_| |_|\__,_| .__/
                                            |_|
"#;

pub fn print() {
    print::print(&format!("{}", BANNER.bright_green().bold()));
}

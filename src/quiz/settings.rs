#[derive(Clone, Debug)]
pub struct Settings {
    pub question_count: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings { question_count: 10 }
    }
}

//! 한글 음절 분해 핵심 모듈

pub mod decomposer;
pub mod tables;
pub mod unicode;

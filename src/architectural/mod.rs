pub mod mvc;

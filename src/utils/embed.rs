use poise::serenity_prelude::CreateEmbed;

pub const COLOR_SUCCESS: u32 = 0x2ECC71; // Green
pub const COLOR_ERROR: u32 = 0xE74C3C; // Red
pub const COLOR_WARNING: u32 = 0xF39C12; // Orange
pub const COLOR_INFO: u32 = 0x3498DB; // Blue

pub fn success(description: &str) -> CreateEmbed {
    CreateEmbed::new()
        .description(description)
        .color(COLOR_SUCCESS)
}

pub fn error(title: &str, description: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title(format!("[ERROR] {}", title))
        .description(description)
        .color(COLOR_ERROR)
}

pub fn warning(description: &str) -> CreateEmbed {
    CreateEmbed::new()
        .description(description)
        .color(COLOR_WARNING)
}

/// First message of every session.
pub const WELCOME_MESSAGE: &str = "Welcome aboard! I'm your AI companion sailing through the digital seas. What adventures shall we embark on today?";

/// Canned replies the bot picks from, in catalog order.
pub const BOT_RESPONSES: [&str; 8] = [
    "Like a message in a bottle, your thoughts have reached me! 🌊",
    "The ocean whispers back: that's an interesting perspective!",
    "Your words ripple across the digital waves... Let me respond.",
    "The depths of conversation grow deeper with each message.",
    "From one shore to another, communication flows like the tide.",
    "In the vast ocean of knowledge, I've found your message.",
    "The currents of conversation carry us to new horizons.",
    "Like dolphins playing in the waves, let's explore this topic!",
];

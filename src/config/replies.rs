//! Canned reply text
//!
//! Every sentence the bot can say lives here. Replies that mention portfolio
//! data are built by the functions below; the rest are plain constants.

use crate::portfolio::{Profile, Skill};

/// Built-in replies that don't depend on portfolio data
pub mod builtin {
    pub const GREETING: &str = "Hello! 👋 Great to meet you! I'm excited to share my work with you. \
What would you like to know about my development journey?";

    pub const PROJECTS_INTRO: &str =
        "Here are some of my featured projects that showcase my skills:";

    pub const CONTACT_INTRO: &str =
        "I'd love to connect with you! Here are the best ways to reach me:";

    pub const SKILLS_INTRO: &str = "Here are my core technical skills:";

    pub const SKILLS_OUTRO: &str = "I'm always learning and staying up-to-date with the latest \
technologies. Currently exploring AI/ML integration and cloud architecture!";

    pub const ABOUT_PASSIONS: &str = r#"I'm passionate about:
• Building scalable web applications
• Learning cutting-edge technologies
• Solving complex problems with elegant code
• Collaborating with amazing teams

I believe in writing clean, maintainable code and creating user experiences that make a difference."#;

    pub const EXPERIENCE: &str = r#"I have hands-on experience leading frontend and full-stack development projects, currently serving as the Tech Team Head during my internship. I specialize in building modern, scalable web applications using the MERN stack, while also mentoring teammates and managing end-to-end delivery.

Key highlights:
• Led development of 3+ full-stack web applications using React.js, Node.js, and MongoDB
• Headed a team of 5+ developers during internship projects, ensuring timely and quality releases
• Built and deployed responsive, user-friendly UIs with Tailwind CSS and GSAP animations
• Implemented Appwrite services for real-time backend features like authentication and storage
• Reduced page load time by 30% through frontend performance optimization
• Streamlined deployment workflows using GitHub Actions and CI/CD practices"#;

    pub const FALLBACK: &str = r#"That's a great question! I'd be happy to help. Try asking me about:

• My background and experience
• Technical skills and expertise
• Recent projects and work
• How we can work together

Or use the quick action buttons for common topics!"#;
}

/// Self introduction built from the profile
pub fn about(profile: &Profile) -> String {
    format!(
        "I'm {}, a {}.\n\n{}\n\n{}",
        profile.name,
        profile.title,
        profile.bio,
        builtin::ABOUT_PASSIONS
    )
}

/// Bulleted skill list between the intro and outro
pub fn skills(skills: &[Skill]) -> String {
    let list = skills
        .iter()
        .map(|s| format!("• {}", s.name()))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{}\n\n{}\n\n{}", builtin::SKILLS_INTRO, list, builtin::SKILLS_OUTRO)
}

/// First bot message of every conversation
pub fn welcome(profile: &Profile) -> String {
    format!(
        "Hello! 👋 Welcome to my interactive portfolio. I'm {}, a {} passionate about creating \
amazing web experiences.\n\nFeel free to ask me about my skills, projects, or experience. \
You can also use the quick actions below!",
        profile.first_name(),
        profile.title
    )
}

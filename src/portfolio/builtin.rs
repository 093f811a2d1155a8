//! Compiled-in portfolio used when no portfolio file is configured

use super::{ContactInfo, Portfolio, Profile, Project, Skill};

const SKILLS: &[&str] = &[
    "React",
    "JavaScript",
    "Node.js",
    "Java",
    "AWS",
    "MongoDB",
    "Express",
    "Tailwind CSS",
    "Socket.IO",
    "GSAP",
    "Appwrite",
];

fn project(name: &str, description: &str, tech: &[&str], link: &str, demo: &str) -> Project {
    Project {
        name: name.to_string(),
        description: description.to_string(),
        tech: tech.iter().map(|t| t.to_string()).collect(),
        link: link.to_string(),
        demo: demo.to_string(),
    }
}

pub(super) fn portfolio() -> Portfolio {
    Portfolio {
        profile: Profile {
            name: "Alex Johnson".to_string(),
            title: "MERN Stack Developer".to_string(),
            bio: "Passionate developer with 1+ years of experience building web applications. \
                  I love creating innovative solutions and learning new technologies."
                .to_string(),
        },
        skills: SKILLS.iter().map(|s| Skill::new(*s)).collect(),
        projects: vec![
            project(
                "Uber Clone",
                "Developed a full-featured Uber clone using the MERN stack with real-time \
                 location tracking and ride-booking functionality using Google Maps API.",
                &["React", "Node.js", "MongoDB", "Google Maps API"],
                "https://github.com/alexjohnson/Uber-clone",
                "https://your-uber-demo-link.com",
            ),
            project(
                "Restroom Finder",
                "Created a location-based app to find nearby restrooms using geolocation and \
                 filtering. Designed for mobile responsiveness with a user-friendly map view.",
                &["React", "Node.js", "Tailwind", "Map API"],
                "https://github.com/alexjohnson/Restroom-finder",
                "https://your-restroom-finder-demo.com",
            ),
            project(
                "3D Animated Website Clone",
                "Recreated a visually stunning website with smooth 3D animations using GSAP and \
                 React. Focused on scroll-based animations and performance optimization.",
                &["React", "GSAP", "HTML", "CSS"],
                "https://github.com/alexjohnson/gsap-3d-clone",
                "https://your-3d-clone-demo.com",
            ),
            project(
                "Blog Platform (Appwrite)",
                "Built a basic blog site using Appwrite backend for authentication and database. \
                 Includes post creation, editing, and real-time syncing (UI still in progress).",
                &["React", "Appwrite", "Tailwind CSS"],
                "https://github.com/alexjohnson/blog-app-appwrite",
                "https://your-blog-demo.com",
            ),
        ],
        contact: ContactInfo {
            email: "alex.johnson@example.com".to_string(),
            github: "https://github.com/alexjohnson".to_string(),
            linkedin: "https://linkedin.com/in/alexjohnson".to_string(),
            phone: "+1 555 0142".to_string(),
        },
    }
}

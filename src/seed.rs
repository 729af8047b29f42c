//! Compiled-in default content. This is the dataset the site ships with;
//! a persisted snapshot, when present and readable, overlays it at load.

use crate::domain::{
    Announcement, AnnouncementKind, BlogPost, Event, EventCategory, EventStatus, TeamMember,
};

pub fn default_events() -> Vec<Event> {
    vec![
        Event {
            id: "1".into(),
            title: "Web Development Workshop".into(),
            date: "2025-03-15".into(),
            description: "Learn modern web development with React, TypeScript, and Tailwind CSS. Build real-world projects and gain hands-on experience.".into(),
            image_url: "https://images.unsplash.com/photo-1517694712202-14dd9538aa97?w=800&h=600&fit=crop".into(),
            category: EventCategory::Workshop,
            status: EventStatus::Upcoming,
            location: Some("IPEC Campus".into()),
            registration_url: None,
            tags: vec!["Web Development".into(), "React".into(), "TypeScript".into()],
            gallery_images: vec![],
        },
        Event {
            id: "2".into(),
            title: "Cybersecurity Fundamentals".into(),
            date: "2025-03-22".into(),
            description: "Essential cybersecurity concepts, ethical hacking basics, and best practices for secure software development.".into(),
            image_url: "https://images.unsplash.com/photo-1550751827-4bd374c3f58b?w=800&h=600&fit=crop".into(),
            category: EventCategory::Workshop,
            status: EventStatus::Upcoming,
            location: Some("IPEC Campus".into()),
            registration_url: None,
            tags: vec!["Cybersecurity".into(), "Ethical Hacking".into()],
            gallery_images: vec![],
        },
        Event {
            id: "3".into(),
            title: "Tech Talk: Future of AI".into(),
            date: "2025-04-05".into(),
            description: "Industry experts discuss the latest trends in artificial intelligence and its impact on various sectors.".into(),
            image_url: "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=800&h=600&fit=crop".into(),
            category: EventCategory::Talk,
            status: EventStatus::Upcoming,
            location: Some("IPEC Auditorium".into()),
            registration_url: None,
            tags: vec!["AI".into(), "Machine Learning".into(), "Technology".into()],
            gallery_images: vec![],
        },
        Event {
            id: "4".into(),
            title: "Mobile App Development Bootcamp".into(),
            date: "2025-04-12".into(),
            description: "Comprehensive bootcamp covering iOS and Android development using React Native and Flutter.".into(),
            image_url: "https://images.unsplash.com/photo-1512941937669-90a1b58e7e9c?w=800&h=600&fit=crop".into(),
            category: EventCategory::Workshop,
            status: EventStatus::Upcoming,
            location: Some("IPEC Campus".into()),
            registration_url: None,
            tags: vec!["Mobile Development".into(), "React Native".into(), "Flutter".into()],
            gallery_images: vec![],
        },
        Event {
            id: "5".into(),
            title: "Data Science Workshop".into(),
            date: "2025-04-20".into(),
            description: "Introduction to data analysis, visualization, and machine learning using Python and popular libraries.".into(),
            image_url: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&h=600&fit=crop".into(),
            category: EventCategory::Workshop,
            status: EventStatus::Upcoming,
            location: Some("IPEC Campus".into()),
            registration_url: None,
            tags: vec!["Data Science".into(), "Python".into(), "Machine Learning".into()],
            gallery_images: vec![],
        },
        Event {
            id: "6".into(),
            title: "IEEE Annual Tech Fest 2025".into(),
            date: "2025-05-10".into(),
            description: "Three-day fest featuring competitions, workshops, exhibitions, and networking opportunities with industry leaders.".into(),
            image_url: "https://images.unsplash.com/photo-1540575467063-178a50c2df87?w=800&h=600&fit=crop".into(),
            category: EventCategory::Competition,
            status: EventStatus::Upcoming,
            location: Some("IPEC Campus".into()),
            registration_url: None,
            tags: vec!["Tech Fest".into(), "Competition".into(), "Networking".into()],
            gallery_images: vec![],
        },
        Event {
            id: "7".into(),
            title: "Tech Innovation Summit 2024".into(),
            date: "2024-11-15".into(),
            description: "A day-long summit featuring keynote speakers, workshops, and networking sessions focused on emerging technologies.".into(),
            image_url: "https://images.unsplash.com/photo-1540575467063-178a50c2df87?w=800&h=600&fit=crop".into(),
            category: EventCategory::Talk,
            status: EventStatus::Past,
            location: Some("IPEC Auditorium".into()),
            registration_url: None,
            tags: vec!["Innovation".into(), "Technology".into()],
            gallery_images: vec![],
        },
        Event {
            id: "8".into(),
            title: "Hackathon 2024".into(),
            date: "2024-10-20".into(),
            description: "24-hour coding marathon where students built innovative solutions to real-world problems.".into(),
            image_url: "https://images.unsplash.com/photo-1504384308090-c894fdcc538d?w=800&h=600&fit=crop".into(),
            category: EventCategory::Competition,
            status: EventStatus::Past,
            location: Some("IPEC Campus".into()),
            registration_url: None,
            tags: vec!["Hackathon".into(), "Coding".into()],
            gallery_images: vec![],
        },
        Event {
            id: "9".into(),
            title: "AI/ML Workshop Series".into(),
            date: "2024-09-10".into(),
            description: "Comprehensive workshop series covering machine learning fundamentals and practical implementations.".into(),
            image_url: "https://images.unsplash.com/photo-1485827404703-89b55fcc595e?w=800&h=600&fit=crop".into(),
            category: EventCategory::Workshop,
            status: EventStatus::Past,
            location: Some("IPEC Campus".into()),
            registration_url: None,
            tags: vec!["AI".into(), "Machine Learning".into()],
            gallery_images: vec![],
        },
        Event {
            id: "10".into(),
            title: "Women in Tech Panel".into(),
            date: "2024-08-25".into(),
            description: "Inspiring panel discussion featuring successful women engineers sharing their career journeys.".into(),
            image_url: "https://images.unsplash.com/photo-1511578314322-379afb476865?w=800&h=600&fit=crop".into(),
            category: EventCategory::Talk,
            status: EventStatus::Past,
            location: Some("IPEC Auditorium".into()),
            registration_url: None,
            tags: vec!["Women in Tech".into(), "Panel Discussion".into()],
            gallery_images: vec![],
        },
        Event {
            id: "11".into(),
            title: "IoT Project Exhibition".into(),
            date: "2024-07-15".into(),
            description: "Student showcase of innovative IoT projects ranging from smart home systems to environmental monitoring.".into(),
            image_url: "https://images.unsplash.com/photo-1518770660439-4636190af475?w=800&h=600&fit=crop".into(),
            category: EventCategory::Exhibition,
            status: EventStatus::Past,
            location: Some("IPEC Campus".into()),
            registration_url: None,
            tags: vec!["IoT".into(), "Exhibition".into()],
            gallery_images: vec![],
        },
        Event {
            id: "12".into(),
            title: "Career Development Bootcamp".into(),
            date: "2024-06-20".into(),
            description: "Intensive bootcamp covering resume building, interview skills, and professional networking strategies.".into(),
            image_url: "https://images.unsplash.com/photo-1591115765373-5207764f72e7?w=800&h=600&fit=crop".into(),
            category: EventCategory::Workshop,
            status: EventStatus::Past,
            location: Some("IPEC Campus".into()),
            registration_url: None,
            tags: vec!["Career Development".into(), "Professional Skills".into()],
            gallery_images: vec![],
        },
    ]
}

pub fn default_team() -> Vec<TeamMember> {
    vec![
        TeamMember {
            id: "1".into(),
            name: "Kunal Sharma".into(),
            designation: "Chairperson".into(),
            photo_url: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=400&fit=crop&crop=faces".into(),
            linkedin_url: "https://linkedin.com/in/kunal-sharma".into(),
            email: "chairperson@ieeeipec.org".into(),
            bio: "Leading IEEE @ IPEC with passion for technology and innovation.".into(),
        },
        TeamMember {
            id: "2".into(),
            name: "Ansh Sharma".into(),
            designation: "Co-chair".into(),
            photo_url: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=400&h=400&fit=crop&crop=faces".into(),
            linkedin_url: "https://linkedin.com/in/ansh-sharma".into(),
            email: "cochair@ieeeipec.org".into(),
            bio: "Co-leading initiatives and fostering innovation in our community.".into(),
        },
        TeamMember {
            id: "3".into(),
            name: "Riddhi Jain".into(),
            designation: "Vice Chair".into(),
            photo_url: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=400&h=400&fit=crop&crop=faces".into(),
            linkedin_url: "https://linkedin.com/in/riddhi-jain".into(),
            email: "vicechair@ieeeipec.org".into(),
            bio: "Supporting leadership and driving technical excellence.".into(),
        },
        TeamMember {
            id: "4".into(),
            name: "Rishabh Wasan".into(),
            designation: "Secretary".into(),
            photo_url: "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?w=400&h=400&fit=crop&crop=faces".into(),
            linkedin_url: "https://linkedin.com/in/rishabh-wasan".into(),
            email: "secretary@ieeeipec.org".into(),
            bio: "Managing communications and organizational activities.".into(),
        },
        TeamMember {
            id: "5".into(),
            name: "Vyom Dharni".into(),
            designation: "Treasurer".into(),
            photo_url: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=400&h=400&fit=crop&crop=faces".into(),
            linkedin_url: "https://linkedin.com/in/vyom-dharni".into(),
            email: "treasurer@ieeeipec.org".into(),
            bio: "Overseeing financial management and budgeting.".into(),
        },
        TeamMember {
            id: "6".into(),
            name: "Adnan Khan".into(),
            designation: "Web Master".into(),
            photo_url: "https://images.unsplash.com/photo-1519345182560-3f2917c472ef?w=400&h=400&fit=crop&crop=faces".into(),
            linkedin_url: "https://linkedin.com/in/adnan-khan".into(),
            email: "webmaster@ieeeipec.org".into(),
            bio: "Maintaining our digital presence and web infrastructure.".into(),
        },
    ]
}

pub fn default_announcement() -> Announcement {
    Announcement {
        message: "IEEE Tech Fest 2025 registration is now open! Join us for an amazing experience.".into(),
        kind: AnnouncementKind::Info,
        action_text: Some("Register Now".into()),
        is_active: true,
    }
}

pub fn default_blog_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "1".into(),
            title: "Getting Started with IEEE: A Complete Guide for New Members".into(),
            excerpt: "Everything you need to know about joining IEEE and making the most of your membership experience.".into(),
            content: "IEEE (Institute of Electrical and Electronics Engineers) is the world's largest technical professional organization...".into(),
            author: "IEEE @ IPEC Team".into(),
            date: "2025-01-15".into(),
            image_url: "https://images.unsplash.com/photo-1522202176988-66273c2fd55f?w=800&h=600&fit=crop".into(),
            tags: vec!["IEEE".into(), "Membership".into(), "Guide".into()],
            category: "guide".into(),
        },
        BlogPost {
            id: "2".into(),
            title: "Tech Fest 2025: Highlights and Key Takeaways".into(),
            excerpt: "A comprehensive recap of our annual tech fest featuring workshops, competitions, and networking sessions.".into(),
            content: "IEEE Tech Fest 2025 was a resounding success, bringing together over 500 participants...".into(),
            author: "Event Team".into(),
            date: "2025-01-10".into(),
            image_url: "https://images.unsplash.com/photo-1540575467063-178a50c2df87?w=800&h=600&fit=crop".into(),
            tags: vec!["Events".into(), "Tech Fest".into(), "Highlights".into()],
            category: "events".into(),
        },
        BlogPost {
            id: "3".into(),
            title: "Women in Engineering: Breaking Barriers in Tech".into(),
            excerpt: "Celebrating the achievements of women engineers and promoting diversity in technology fields.".into(),
            content: "The Women in Engineering (WIE) chapter at IEEE @ IPEC is dedicated to empowering women in technology...".into(),
            author: "WIE Chapter".into(),
            date: "2025-01-05".into(),
            image_url: "https://images.unsplash.com/photo-1511578314322-379afb476865?w=800&h=600&fit=crop".into(),
            tags: vec!["WIE".into(), "Diversity".into(), "Engineering".into()],
            category: "diversity".into(),
        },
        BlogPost {
            id: "4".into(),
            title: "Building Your First Web Application: A Beginner's Journey".into(),
            excerpt: "Learn the fundamentals of web development and build your first application from scratch.".into(),
            content: "Web development is one of the most accessible and rewarding fields in technology today...".into(),
            author: "Technical Team".into(),
            date: "2024-12-28".into(),
            image_url: "https://images.unsplash.com/photo-1517694712202-14dd9538aa97?w=800&h=600&fit=crop".into(),
            tags: vec!["Web Development".into(), "Tutorial".into(), "Beginner".into()],
            category: "tutorial".into(),
        },
    ]
}

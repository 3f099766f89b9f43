//! Static page copy.
//!
//! Section components render straight from these tables; state modules only
//! need their lengths.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const BRAND: &str = "AI Tech Africa";
pub const CONTACT_EMAIL: &str = "hello@aitechafrica.com";

/// `(label, anchor)` pairs for the navbar.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("Home", "#home"),
    ("About", "#about"),
    ("Services", "#services"),
    ("Portfolio", "#portfolio"),
    ("Testimonials", "#testimonials"),
    ("FAQ", "#faq"),
    ("Contact", "#contact"),
];

pub struct Stat {
    pub target: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { target: 150, suffix: "+", label: "Projects Delivered" },
    Stat { target: 12, suffix: "", label: "Countries Served" },
    Stat { target: 98, suffix: "%", label: "Client Satisfaction" },
    Stat { target: 40, suffix: "+", label: "AI Engineers" },
];

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: "fa-brain",
        title: "AI Strategy",
        summary: "Roadmaps that tie machine learning investments to measurable business outcomes.",
    },
    Service {
        icon: "fa-robot",
        title: "Conversational AI",
        summary: "Multilingual assistants for customer support, sales, and internal knowledge.",
    },
    Service {
        icon: "fa-chart-line",
        title: "Data & Analytics",
        summary: "Pipelines, dashboards, and forecasting built on the data you already have.",
    },
    Service {
        icon: "fa-graduation-cap",
        title: "Training",
        summary: "Hands-on programs that grow in-house AI talent across the continent.",
    },
];

pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub summary: &'static str,
    pub details: &'static str,
}

pub const PORTFOLIO: &[Project] = &[
    Project {
        title: "AgriSense",
        category: "Agriculture",
        summary: "Crop disease detection from smartphone photos.",
        details: "A vision model running offline on low-end Android devices, used by extension officers to \
                  diagnose maize and cassava diseases in the field.",
    },
    Project {
        title: "PayFlow Assist",
        category: "Fintech",
        summary: "Mobile-money support assistant in five languages.",
        details: "A conversational agent that resolves common account questions over USSD and chat, handing \
                  off to human agents with full context when needed.",
    },
    Project {
        title: "ClinicQueue",
        category: "Healthcare",
        summary: "Patient triage and wait-time forecasting.",
        details: "Forecasts daily patient volume for outpatient clinics and suggests staffing adjustments a \
                  week ahead.",
    },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "They understood our market from day one and shipped a model our farmers actually use.",
        name: "Amina Okafor",
        role: "Head of Product, AgriSense",
    },
    Testimonial {
        quote: "Support tickets dropped by a third within two months of launching the assistant.",
        name: "Kwame Mensah",
        role: "COO, PayFlow",
    },
    Testimonial {
        quote: "The training program gave our analysts the confidence to own our ML stack.",
        name: "Fatima Diallo",
        role: "Director of Data, Sahel Health",
    },
];

pub struct Question {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Question] = &[
    Question {
        question: "What industries do you work with?",
        answer: "Agriculture, finance, healthcare, logistics, and the public sector, mostly across East and \
                 West Africa.",
    },
    Question {
        question: "How long does a typical project take?",
        answer: "Discovery takes two to three weeks. Most pilots ship within three months.",
    },
    Question {
        question: "Do you offer ongoing support?",
        answer: "Yes. Every deployment includes monitoring and a support plan sized to your team.",
    },
    Question {
        question: "Can you work with our existing data?",
        answer: "Almost always. We start with an audit of what you have before recommending anything new.",
    },
];

/// `(label, message)` pairs for the chat widget's quick-reply buttons.
pub const QUICK_REPLIES: &[(&str, &str)] = &[
    ("Services", "What services do you offer?"),
    ("Pricing", "How much does a project cost?"),
    ("Contact", "How can I get in touch with your team?"),
];

pub const CHAT_GREETING: &str = "Hi! I'm the AI Tech Africa assistant. Ask me anything about our services.";

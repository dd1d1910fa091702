// src/content/company.rs

pub const COMPANY_NAME: &str = "Angkasa Jaya Propertindo";
pub const TAGLINE: &str = "Indonesia's Trusted Property Partner";

pub const PHONE_DISPLAY: &str = "+62 331 123 4567";
pub const PHONE_URI: &str = "tel:+62331123456";
pub const EMAIL: &str = "info@angkasajaya.id";
pub const WHATSAPP_DISPLAY: &str = "+62 878 7757 9708";
pub const WHATSAPP_URI: &str = "https://wa.me/6287877579708";

/// "Get a Quote" deep link with a pre-filled message.
pub const WHATSAPP_QUOTE_URI: &str = "https://wa.me/6287877579708?text=Hello%20Angkasa%20Jaya%20Propertindo,%20I'm%20interested%20in%20getting%20a%20quote%20for%20your%20services.";

/// Floating chat button on the contact page.
pub const WHATSAPP_CHAT_URI: &str = "https://wa.me/6287877579708?text=Hello%20Angkasa%20Jaya%20Propertindo,%20I'm%20interested%20in%20your%20services.";

pub const MAP_EMBED_URI: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d63245.97055414075!2d113.6676053871582!3d-8.172139899999997!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x2dd695b617d8f623%3A0xf6c4437632474338!2sJember%2C%20Jember%20Regency%2C%20East%20Java!5e0!3m2!1sen!2sid!4v1652345678901!5m2!1sen!2sid";

pub const HQ_ADDRESS_LINES: [&str; 3] = ["Jl. Ahmad Yani No. 123", "Jember, East Java", "Indonesia 68121"];

pub const BUSINESS_HOURS: [(&str, &str); 2] = [
    ("Monday - Friday", "9:00 AM - 5:00 PM"),
    ("Saturday", "9:00 AM - 1:00 PM"),
];

pub struct Office {
    pub city: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
}

impl Office {
    /// `tel:` link with the display spacing removed.
    pub fn phone_uri(&self) -> String {
        let digits: String = self.phone.split_whitespace().collect();
        format!("tel:{digits}")
    }
}

pub const OFFICES: [Office; 4] = [
    Office { city: "Jakarta", address: "Jl. Sudirman No. 123, Jakarta Selatan", phone: "+62 21 5555 6666" },
    Office { city: "Bali", address: "Jl. Sunset Road No. 88, Kuta, Bali", phone: "+62 361 123 456" },
    Office { city: "Surabaya", address: "Jl. Pemuda No. 45, Surabaya", phone: "+62 31 5678 9012" },
    Office { city: "Bandung", address: "Jl. Dago No. 67, Bandung", phone: "+62 22 1234 5678" },
];

pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const WHY_CHOOSE_US: [Feature; 3] = [
    Feature {
        title: "Zero Consultation Fees",
        description: "Get expert property advice without any consultation charges. We believe in building relationships before business.",
    },
    Feature {
        title: "Legal & Transparent Process",
        description: "Every transaction is handled with complete legal compliance and transparency, ensuring your peace of mind.",
    },
    Feature {
        title: "14+ Trusted Partners",
        description: "Access exclusive properties from our network of 14+ trusted developer partners across Indonesia.",
    },
];

pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const TIMELINE: [Milestone; 8] = [
    Milestone {
        year: "2010",
        title: "Humble Beginnings in Jember",
        description: "Angkasa Jaya Propertindo was founded in Jember, East Java, with a small team of 3 passionate property consultants focused on local residential sales.",
    },
    Milestone {
        year: "2012",
        title: "Expansion to Surabaya",
        description: "Following early success, we opened our second office in Surabaya, expanding our services to East Java's capital and growing our team to 15 professionals.",
    },
    Milestone {
        year: "2014",
        title: "Jakarta Headquarters Established",
        description: "We established our national headquarters in Jakarta, marking our entry into Indonesia's primary property market and introducing commercial property services.",
    },
    Milestone {
        year: "2016",
        title: "Bali Office & Tourism Properties",
        description: "Our expansion to Bali introduced specialized services for tourism properties and luxury villas, catering to both domestic and international investors.",
    },
    Milestone {
        year: "2018",
        title: "Developer Partnerships Program",
        description: "We launched our formal Developer Partnerships Program, creating strategic alliances with Indonesia's leading property developers to offer exclusive opportunities.",
    },
    Milestone {
        year: "2020",
        title: "Digital Transformation",
        description: "Adapting to changing market conditions, we implemented comprehensive digital solutions including virtual property tours and online consultation services.",
    },
    Milestone {
        year: "2023",
        title: "National Reach Achievement",
        description: "Angkasa Jaya reached a significant milestone with presence in 12 major Indonesian cities and a network of over 14 developer partners nationwide.",
    },
    Milestone {
        year: "2025",
        title: "Looking to the Future",
        description: "Today, we continue our mission to be Indonesia's most trusted property partner, with plans for further expansion and innovation in property services.",
    },
];

pub const CORE_VALUES: [Feature; 4] = [
    Feature {
        title: "Excellence",
        description: "We strive for excellence in every aspect of our service, continuously raising standards to exceed client expectations.",
    },
    Feature {
        title: "Client-Centered",
        description: "Our clients' needs and goals are at the heart of everything we do, guiding our recommendations and actions.",
    },
    Feature {
        title: "Integrity",
        description: "We operate with complete transparency and honesty, building trust through ethical business practices and accountability.",
    },
    Feature {
        title: "Innovation",
        description: "We embrace innovation and continuously evolve our services to address the changing needs of Indonesia's property market.",
    },
];

pub struct TeamMember {
    pub name: &'static str,
    pub position: &'static str,
    pub bio: &'static str,
}

pub const LEADERSHIP: [TeamMember; 4] = [
    TeamMember {
        name: "Budi Santoso",
        position: "Founder & CEO",
        bio: "With over 20 years of experience in Indonesia's property market, Budi founded Angkasa Jaya with a vision to transform property consultation through transparency and client-focused service.",
    },
    TeamMember {
        name: "Siti Rahayu",
        position: "Chief Operations Officer",
        bio: "Siti oversees all operational aspects of Angkasa Jaya, ensuring excellence in service delivery across all regions and implementing innovative processes to enhance client experience.",
    },
    TeamMember {
        name: "Arief Wijaya",
        position: "Head of Property Investment",
        bio: "Arief leads our investment consulting division, bringing expertise from his background in finance and real estate economics to help clients maximize their property investment returns.",
    },
    TeamMember {
        name: "Maya Indah",
        position: "Legal Affairs Director",
        bio: "With a specialization in Indonesian property law, Maya ensures all transactions are legally sound and compliant, protecting our clients' interests throughout the property journey.",
    },
];

pub const DEVELOPER_PARTNERS: [&str; 8] = [
    "Sinar Mas Land",
    "Ciputra Group",
    "Agung Podomoro",
    "Summarecon",
    "Pakuwon Group",
    "Intiland",
    "Lippo Group",
    "Paramount Land",
];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const COMPANY_STATS: [Stat; 4] = [
    Stat { value: "12 Cities", label: "Nationwide Presence" },
    Stat { value: "120+ Experts", label: "Professional Team" },
    Stat { value: "15 Years", label: "Industry Experience" },
    Stat { value: "8,500+", label: "Successful Transactions" },
];

pub struct Award {
    pub year: &'static str,
    pub award: &'static str,
    pub organization: &'static str,
}

pub const AWARDS: [Award; 6] = [
    Award { year: "2023", award: "Best Property Consultancy Indonesia", organization: "Asia Pacific Property Awards" },
    Award { year: "2022", award: "Excellence in Customer Service", organization: "Indonesia Property & Real Estate Awards" },
    Award { year: "2021", award: "Most Innovative Property Agency", organization: "Indonesia Digital Innovation Awards" },
    Award { year: "2020", award: "Top Property Investment Consultancy", organization: "Indonesia Investment Forum" },
    Award { year: "2019", award: "Best Property Marketing Campaign", organization: "Marketing Excellence Awards Indonesia" },
    Award { year: "2018", award: "Property Agency of the Year", organization: "Indonesia Property Awards" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn office_phone_links_drop_spaces() {
        assert_eq!(OFFICES[0].phone_uri(), "tel:+622155556666");
        assert_eq!(OFFICES[1].phone_uri(), "tel:+62361123456");
    }
}

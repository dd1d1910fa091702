// src/content/services.rs

pub struct ProcessStep {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Offering {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct ServiceStat {
    pub value: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub struct Testimonial {
    pub name: &'static str,
    /// City for buyers and tenants, role for investors and developers.
    pub byline: &'static str,
    pub quote: &'static str,
}

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub struct Service {
    /// Card title on the services overview.
    pub title: &'static str,
    pub summary: &'static str,
    /// Hero heading on the detail page.
    pub heading: &'static str,
    pub tagline: &'static str,
    pub offerings_heading: &'static str,
    pub offerings: &'static [Offering],
    pub steps: &'static [ProcessStep],
    /// Bullet points beside the consultation call-to-action.
    pub benefits: &'static [&'static str],
    pub stats: &'static [ServiceStat],
    pub testimonials: &'static [Testimonial],
    pub faqs: &'static [Faq],
}

impl Service {
    /// Detail page link, derived from the card title: lowercase, with
    /// whitespace runs turned into hyphens.
    pub fn href(&self) -> String {
        let slug = self
            .title
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-");
        format!("/services/{slug}")
    }
}

pub const PROPERTY_SALES: Service = Service {
    title: "Property Sales",
    summary: "Find your dream property with our extensive listings of residential and commercial properties across Indonesia. Our expert agents will guide you through every step of the purchase process.",
    heading: "Property Sales Services",
    tagline: "Your journey to property ownership made simple, transparent, and rewarding with Indonesia's most trusted property partner.",
    offerings_heading: "",
    offerings: &[],
    steps: &[
        ProcessStep {
            title: "Property Discovery",
            description: "We help you identify your needs and preferences, then match you with properties that meet your criteria from our extensive database across Indonesia.",
        },
        ProcessStep {
            title: "Guided Viewings",
            description: "Our agents arrange and accompany you on property viewings, providing expert insights on location, property condition, and investment potential.",
        },
        ProcessStep {
            title: "Seamless Closing",
            description: "We handle all paperwork, legal requirements, and negotiations to ensure a smooth transaction from offer acceptance to key handover.",
        },
    ],
    benefits: &[
        "Personalized property recommendations",
        "Market insights and investment advice",
        "Transparent process and pricing",
    ],
    stats: &[],
    testimonials: &[
        Testimonial {
            name: "Budi Santoso",
            byline: "Jakarta",
            quote: "Angkasa Jaya helped me find the perfect apartment in Jakarta. Their team was professional, responsive, and made the entire process stress-free.",
        },
        Testimonial {
            name: "Siti Rahayu",
            byline: "Bali",
            quote: "After struggling with other agencies, Angkasa Jaya found us our dream villa in just two weeks. Their market knowledge and negotiation skills saved us millions of rupiah.",
        },
        Testimonial {
            name: "Arief Wijaya",
            byline: "Surabaya",
            quote: "The legal support provided by Angkasa Jaya was invaluable. They caught issues in the property documents that I would have missed, potentially saving me from a bad investment.",
        },
    ],
    faqs: &[],
};

pub const PROPERTY_RENTALS: Service = Service {
    title: "Rentals",
    summary: "Discover premium rental properties that match your lifestyle and budget. From short-term vacation rentals to long-term residential leases, we have options for every need.",
    heading: "Property Rental Services",
    tagline: "Find your perfect rental property with Indonesia's most trusted property partner. From apartments to villas, we have options for every lifestyle.",
    offerings_heading: "Rental Property Types",
    offerings: &[
        Offering {
            title: "Residential Apartments",
            description: "Modern apartments in prime locations across Indonesia's major cities, featuring various layouts from studios to 3+ bedrooms.",
        },
        Offering {
            title: "Luxury Villas",
            description: "Exclusive villas in Bali, Jakarta, and other premium locations, perfect for those seeking privacy and high-end amenities.",
        },
        Offering {
            title: "Commercial Spaces",
            description: "Office spaces, retail units, and commercial properties in strategic business districts across Indonesia.",
        },
        Offering {
            title: "Vacation Rentals",
            description: "Short-term holiday accommodations in Indonesia's most popular tourist destinations, fully furnished and ready to enjoy.",
        },
    ],
    steps: &[
        ProcessStep {
            title: "Property Matching",
            description: "We help you identify your rental needs and preferences, then match you with properties that meet your criteria from our extensive database across Indonesia.",
        },
        ProcessStep {
            title: "Seamless Documentation",
            description: "Our team handles all rental agreements, ensuring fair terms and transparent conditions. We verify all documents to protect both tenants and property owners.",
        },
        ProcessStep {
            title: "Move-in Support",
            description: "From key handover to property condition reports, we ensure a smooth transition into your new rental property with ongoing support throughout your tenancy.",
        },
    ],
    benefits: &[
        "Personalized property recommendations",
        "Transparent rental terms and conditions",
        "Ongoing support throughout your tenancy",
    ],
    stats: &[],
    testimonials: &[
        Testimonial {
            name: "Maya Wijaya",
            byline: "Jakarta",
            quote: "Angkasa Jaya found me the perfect apartment in Jakarta's business district. The entire process was smooth, and they even helped negotiate better terms with the landlord.",
        },
        Testimonial {
            name: "Dimas Pratama",
            byline: "Bali",
            quote: "As an expat, finding a reliable rental in Bali was challenging until I found Angkasa Jaya. Their team handled everything, from paperwork to ensuring the villa was properly maintained.",
        },
        Testimonial {
            name: "Indah Sari",
            byline: "Surabaya",
            quote: "When I had maintenance issues with my rental, Angkasa Jaya responded within hours. Their tenant support is truly exceptional and made my rental experience stress-free.",
        },
    ],
    faqs: &[],
};

pub const PROPERTY_MANAGEMENT: Service = Service {
    title: "Property Management",
    summary: "Let us handle the day-to-day operations of your property investment. Our comprehensive management services include tenant screening, maintenance, rent collection, and more.",
    heading: "Property Management Services",
    tagline: "Maximize your property's potential with our comprehensive management solutions. Let us handle the details while you enjoy the returns.",
    offerings_heading: "Comprehensive Management Services",
    offerings: &[
        Offering {
            title: "Tenant Relations",
            description: "Professional tenant screening, lease management, and responsive communication to ensure quality tenants and minimize vacancies.",
        },
        Offering {
            title: "Maintenance Management",
            description: "Coordinated property maintenance, emergency repairs, and improvement projects with trusted contractors.",
        },
        Offering {
            title: "Financial Management",
            description: "Rent collection, expense tracking, and detailed financial reporting to maximize your property's profitability.",
        },
        Offering {
            title: "Inspection Services",
            description: "Regular property inspections to identify and address issues before they become costly problems.",
        },
        Offering {
            title: "Legal Compliance",
            description: "Ensuring your property meets all local regulations and legal requirements to avoid potential liabilities.",
        },
        Offering {
            title: "Performance Optimization",
            description: "Strategic recommendations to enhance property value and increase rental income over time.",
        },
    ],
    steps: &[
        ProcessStep {
            title: "Property Assessment",
            description: "We conduct a thorough evaluation of your property, identifying opportunities for improvement and creating a customized management plan.",
        },
        ProcessStep {
            title: "Tenant Management",
            description: "Our team handles tenant screening, lease agreements, rent collection, and addressing tenant concerns promptly and professionally.",
        },
        ProcessStep {
            title: "Maintenance & Upkeep",
            description: "We coordinate regular maintenance, emergency repairs, and property improvements with our network of trusted contractors.",
        },
        ProcessStep {
            title: "Financial Reporting",
            description: "Receive detailed monthly reports on property performance, income, expenses, and recommendations for maximizing your investment returns.",
        },
    ],
    benefits: &[
        "Free property assessment and valuation",
        "Customized management proposal",
        "Transparent fee structure with no hidden costs",
    ],
    stats: &[
        ServiceStat { value: "98%", label: "Occupancy Rate", description: "Average occupancy rate across our managed properties" },
        ServiceStat { value: "24h", label: "Response Time", description: "Maximum response time for maintenance requests" },
        ServiceStat { value: "15%", label: "Higher Returns", description: "Average increase in rental income for our clients" },
        ServiceStat { value: "500+", label: "Properties Managed", description: "Across Indonesia's major cities and regions" },
    ],
    testimonials: &[
        Testimonial {
            name: "Hendra Wijaya",
            byline: "Jakarta",
            quote: "Since Angkasa Jaya took over management of my apartment building, occupancy has increased by 20% and my rental income has grown significantly. Their team is professional and proactive.",
        },
        Testimonial {
            name: "Rina Hartono",
            byline: "Bali",
            quote: "As an overseas investor, I needed a reliable team to manage my villa in Bali. Angkasa Jaya has exceeded my expectations with their detailed reporting and excellent tenant selection.",
        },
    ],
    faqs: &[],
};

pub const PROPERTY_MARKETING: Service = Service {
    title: "Marketing",
    summary: "Maximize your property's visibility with our strategic marketing services. We leverage digital platforms, professional photography, and our extensive network to attract qualified buyers.",
    heading: "Property Marketing Services",
    tagline: "Showcase your property to the right audience with our comprehensive marketing strategies designed to maximize visibility and attract qualified buyers.",
    offerings_heading: "Multi-Channel Marketing Approach",
    offerings: &[
        Offering {
            title: "Online Property Portals",
            description: "Premium listings on Indonesia's top property websites including Rumah.com, 99.co, and PropertyGuru.",
        },
        Offering {
            title: "Social Media Marketing",
            description: "Targeted campaigns across Instagram, Facebook, and YouTube to reach potential buyers where they spend time online.",
        },
        Offering {
            title: "Search Engine Marketing",
            description: "SEO and paid search strategies to ensure your property appears when potential buyers search online.",
        },
        Offering {
            title: "Virtual Tours & 3D Imaging",
            description: "Immersive virtual experiences that allow prospects to explore properties remotely with stunning detail.",
        },
    ],
    steps: &[
        ProcessStep {
            title: "Market Analysis",
            description: "We conduct thorough market research to identify your property's unique selling points and target audience for maximum impact.",
        },
        ProcessStep {
            title: "Professional Content Creation",
            description: "Our team creates stunning photography, videography, and virtual tours that showcase your property in the best possible light.",
        },
        ProcessStep {
            title: "Multi-Channel Distribution",
            description: "We leverage our extensive network of online and offline channels to ensure maximum visibility for your property.",
        },
        ProcessStep {
            title: "Lead Management",
            description: "Our dedicated team qualifies and nurtures leads, ensuring only serious prospects are connected with you.",
        },
        ProcessStep {
            title: "Performance Analysis",
            description: "We continuously monitor campaign performance and make data-driven adjustments to optimize results and maximize ROI.",
        },
    ],
    benefits: &[
        "Free property assessment and valuation",
        "Customized marketing proposal",
        "Transparent pricing with no hidden costs",
    ],
    stats: &[
        ServiceStat { value: "35%", label: "Faster Sales", description: "Average reduction in days on market compared to industry standard" },
        ServiceStat { value: "12%", label: "Higher Value", description: "Average increase in final sale price for marketed properties" },
        ServiceStat { value: "3x", label: "More Leads", description: "Average increase in qualified leads compared to traditional marketing" },
        ServiceStat { value: "98%", label: "Client Satisfaction", description: "Percentage of clients who would recommend our marketing services" },
    ],
    testimonials: &[
        Testimonial {
            name: "Surya Wijaya",
            byline: "Property Developer",
            quote: "The marketing campaign created by Angkasa Jaya for our luxury apartment complex exceeded all expectations. Their multi-channel approach and stunning visuals helped us sell 70% of units before construction was even completed.",
        },
        Testimonial {
            name: "Dewi Sartika",
            byline: "Homeowner",
            quote: "I was struggling to sell my villa for months with another agency. Angkasa Jaya's marketing team completely transformed the presentation with professional photography and virtual tours. The property sold within 45 days at a price above my expectations.",
        },
    ],
    faqs: &[],
};

pub const INVESTMENT_CONSULTING: Service = Service {
    title: "Investment Consulting",
    summary: "Make informed investment decisions with guidance from our property investment experts. We analyze market trends, ROI potential, and help you build a profitable property portfolio.",
    heading: "Investment Consulting Services",
    tagline: "Maximize your property investment returns with strategic guidance from Indonesia's leading real estate investment consultants.",
    offerings_heading: "Investment Strategies",
    offerings: &[
        Offering {
            title: "Residential Growth",
            description: "Strategic investments in emerging residential areas with high appreciation potential, focusing on Indonesia's rapidly developing urban centers.",
        },
        Offering {
            title: "Income Generation",
            description: "Portfolio optimization for consistent rental yields and cash flow, targeting properties with strong rental demand and minimal vacancy risks.",
        },
        Offering {
            title: "Value Appreciation",
            description: "Long-term capital growth strategy focusing on properties in locations with infrastructure development and economic expansion plans.",
        },
        Offering {
            title: "Diversification",
            description: "Balanced investment approach across multiple property types and locations to minimize risk and maximize overall portfolio performance.",
        },
    ],
    steps: &[
        ProcessStep {
            title: "Market Analysis",
            description: "We conduct comprehensive market research to identify investment opportunities with the highest potential returns across Indonesia's diverse property markets.",
        },
        ProcessStep {
            title: "Portfolio Assessment",
            description: "Our experts evaluate your existing investments and financial goals to create a personalized property investment strategy aligned with your objectives.",
        },
        ProcessStep {
            title: "Investment Strategy",
            description: "We develop a tailored investment plan with diversification recommendations, risk assessment, and projected returns for both short and long-term horizons.",
        },
        ProcessStep {
            title: "Ongoing Optimization",
            description: "Our team continuously monitors market conditions and your portfolio performance, providing regular updates and strategic adjustments to maximize returns.",
        },
    ],
    benefits: &[
        "Free portfolio assessment and analysis",
        "Customized investment strategy proposal",
        "Market insights and opportunity identification",
    ],
    stats: &[
        ServiceStat { value: "18%", label: "Average ROI", description: "Annual return on investment for our client portfolios" },
        ServiceStat { value: "Rp 12T+", label: "Assets Advised", description: "Total value of property investments under our advisory" },
        ServiceStat { value: "350+", label: "Investors", description: "Active clients trusting our investment expertise" },
        ServiceStat { value: "14", label: "Years Experience", description: "Combined market expertise across Indonesia" },
    ],
    testimonials: &[
        Testimonial {
            name: "Bambang Suryanto",
            byline: "Real Estate Investor",
            quote: "Angkasa Jaya's investment consulting team helped me diversify my property portfolio across Jakarta and Bali. Their market insights and strategic guidance have increased my annual returns by over 20%.",
        },
        Testimonial {
            name: "Lina Wijaya",
            byline: "Family Office Director",
            quote: "We've worked with Angkasa Jaya for three years to manage our family's property investments. Their analytical approach and deep market knowledge have been instrumental in optimizing our portfolio's performance.",
        },
        Testimonial {
            name: "Hadi Gunawan",
            byline: "International Investor",
            quote: "As a foreign investor in Indonesia's property market, Angkasa Jaya's consulting services have been invaluable. They've helped me navigate regulatory complexities while identifying high-performing investment opportunities.",
        },
    ],
    faqs: &[
        Faq {
            question: "What is the minimum investment amount you work with?",
            answer: "We work with investors across various portfolio sizes, but typically our services are most beneficial for property investments starting from Rp 1 billion. However, we also offer specialized advisory packages for emerging investors with smaller portfolios who are looking to grow strategically.",
        },
        Faq {
            question: "How do you charge for your investment consulting services?",
            answer: "We offer several fee structures to suit different investor needs. These include fixed consulting fees for specific projects, retainer-based ongoing advisory services, and performance-based fees for certain investment strategies. During your initial consultation, we'll recommend the most appropriate structure based on your portfolio size and objectives.",
        },
        Faq {
            question: "Do you provide advice on international property investments?",
            answer: "Yes, while our primary expertise is in Indonesia's property market, we also offer consulting services for international property investments, particularly in Southeast Asia and select global markets. Our international advisory team has experience in cross-border transactions and can help optimize your global property portfolio.",
        },
        Faq {
            question: "How often will I receive updates on my investment strategy?",
            answer: "Clients receive quarterly comprehensive portfolio reviews and performance reports. Additionally, we provide monthly market updates and immediate notifications for time-sensitive opportunities or market changes that might impact your investment strategy. Our client portal also offers real-time access to your portfolio performance metrics.",
        },
        Faq {
            question: "Can you help with financing and tax optimization for property investments?",
            answer: "Yes, our comprehensive consulting services include guidance on optimal financing structures for property acquisitions and tax-efficient investment strategies. We work with a network of financial institutions and tax specialists to ensure your property investments are structured for maximum after-tax returns while maintaining compliance with all regulations.",
        },
    ],
};

pub const LEGAL_SUPPORT: Service = Service {
    title: "Legal Support",
    summary: "Navigate Indonesia's property laws with confidence. Our legal team ensures all transactions comply with regulations and helps resolve any legal issues related to property ownership.",
    heading: "Legal Support Services",
    tagline: "Navigate Indonesia's complex property laws with confidence through our comprehensive legal support services.",
    offerings_heading: "Our Legal Services",
    offerings: &[
        Offering {
            title: "Property Acquisition",
            description: "Comprehensive legal support for buying property, including title verification, contract review, and regulatory compliance to ensure a secure purchase.",
        },
        Offering {
            title: "Contract Management",
            description: "Expert drafting and review of all property-related contracts, from purchase agreements to leases, ensuring your interests are protected.",
        },
        Offering {
            title: "Foreign Ownership",
            description: "Specialized guidance for international investors navigating Indonesia's foreign ownership regulations and structuring compliant property investments.",
        },
        Offering {
            title: "Regulatory Compliance",
            description: "Ongoing support to ensure your property investments remain compliant with Indonesia's evolving property laws and regulations.",
        },
    ],
    steps: &[
        ProcessStep {
            title: "Document Review",
            description: "Our legal experts thoroughly examine all property-related documents to identify potential issues and ensure compliance with Indonesian property laws.",
        },
        ProcessStep {
            title: "Legal Assessment",
            description: "We conduct a comprehensive legal assessment of the property transaction, identifying risks and providing clear guidance on legal requirements and obligations.",
        },
        ProcessStep {
            title: "Compliance Assurance",
            description: "Our team ensures all aspects of your property transaction comply with local regulations, tax laws, and zoning requirements to prevent future legal complications.",
        },
        ProcessStep {
            title: "Transaction Security",
            description: "We secure your property rights through proper documentation, registration, and legal protection measures, safeguarding your investment for the long term.",
        },
    ],
    benefits: &[
        "Free initial legal assessment",
        "Clear explanation of legal requirements",
        "Transparent fee structure with no hidden costs",
    ],
    stats: &[
        ServiceStat { value: "1,200+", label: "Transactions Secured", description: "Property transactions successfully completed with legal protection" },
        ServiceStat { value: "100%", label: "Compliance Rate", description: "All transactions fully compliant with Indonesian property laws" },
        ServiceStat { value: "15+", label: "Legal Specialists", description: "Dedicated property law experts on our team" },
        ServiceStat { value: "Rp 8T+", label: "Transaction Value", description: "Total value of legally secured property transactions" },
    ],
    testimonials: &[
        Testimonial {
            name: "Rudi Hartono",
            byline: "Property Developer",
            quote: "Angkasa Jaya's legal team helped us resolve a complex land title dispute that had stalled our development project for months. Their expertise in Indonesian property law was invaluable.",
        },
        Testimonial {
            name: "Sarah Johnson",
            byline: "Foreign Investor",
            quote: "As a foreign investor, navigating Indonesia's property ownership laws seemed daunting until I worked with Angkasa Jaya. They structured a legally compliant investment that protected my interests.",
        },
        Testimonial {
            name: "Budi Santoso",
            byline: "Property Owner",
            quote: "When inheritance issues complicated my property ownership, Angkasa Jaya provided clear legal guidance and documentation that secured my rights and prevented potential family disputes.",
        },
    ],
    faqs: &[
        Faq {
            question: "What are the key legal documents needed for property transactions in Indonesia?",
            answer: "Essential documents include the Certificate of Land Ownership (SHM), Building Permit (IMB), Tax Object Sale Value (NJOP), Land and Building Tax (PBB) receipts, and identity documents of all parties. Our legal team verifies all these documents and identifies any additional requirements based on your specific transaction.",
        },
        Faq {
            question: "Can foreigners legally own property in Indonesia?",
            answer: "Indonesia has restrictions on foreign property ownership. Foreigners can obtain usage rights (Hak Pakai) for residential properties for up to 80 years, or utilize nominee structures with proper legal safeguards. Our legal team specializes in creating compliant ownership structures for foreign investors.",
        },
        Faq {
            question: "What legal issues should I be aware of when buying pre-construction property?",
            answer: "Pre-construction purchases involve additional legal considerations including developer credentials, construction permits, project financing, completion guarantees, and specification compliance. Our legal support includes thorough due diligence on the developer and project to protect your investment.",
        },
        Faq {
            question: "How do you handle property disputes?",
            answer: "We employ a strategic approach to property disputes, beginning with thorough document review and negotiation attempts. If necessary, we provide representation in mediation, arbitration, or court proceedings, always prioritizing efficient and cost-effective resolution strategies.",
        },
        Faq {
            question: "What legal services do you provide for commercial property transactions?",
            answer: "Our commercial property legal services include zoning and land use verification, environmental compliance assessment, commercial lease drafting and review, strata title arrangements, and complex ownership structure creation. We also provide ongoing compliance monitoring for commercial property owners.",
        },
    ],
};

/// Services in overview order.
pub const SERVICES: [&Service; 6] = [
    &PROPERTY_SALES,
    &PROPERTY_RENTALS,
    &PROPERTY_MANAGEMENT,
    &PROPERTY_MARKETING,
    &INVESTMENT_CONSULTING,
    &LEGAL_SUPPORT,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hrefs_are_slugged_titles() {
        assert_eq!(PROPERTY_SALES.href(), "/services/property-sales");
        assert_eq!(PROPERTY_RENTALS.href(), "/services/rentals");
        assert_eq!(INVESTMENT_CONSULTING.href(), "/services/investment-consulting");
    }

    #[test]
    fn every_service_has_a_process() {
        for service in SERVICES {
            assert!(!service.steps.is_empty(), "{}", service.title);
            assert!(!service.testimonials.is_empty(), "{}", service.title);
        }
    }
}

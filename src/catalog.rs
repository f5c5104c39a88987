use crate::model::{Contact, EventDetails, EventIcon, EventRecord, Prize, SiteInfo, Sponsor};

const CONTACT_EMAIL: &str = "iseinnovisions@gmail.com";

pub static SITE: SiteInfo = SiteInfo {
    event_name: "TECH TRIAD 2025",
    tagline: "SPARK CREATIVITY, DRIVE POSSIBILITY",
    date: "12TH NOVEMBER 2025",
    venue: "A- BLOCK SEMINAR HALL",
    institution: "DAYANANDA SAGAR ACADEMY OF TECHNOLOGY AND MANAGEMENT",
    department: "DEPARTMENT OF INFORMATION SCIENCE & ENGINEERING",
    presenter: "INNOVISIONS Presents",
    organiser: "Innovisions, DSATM",
};

pub static EVENTS: [EventRecord; 3] = [
    EventRecord {
        id: "ideathon",
        title: "Ideathon",
        description: "INNOVATION STARTS HERE!",
        icon: EventIcon::Lightbulb,
        details: EventDetails {
            long_description: "Use your creativity, research, and critical thinking skills to develop innovative concepts and business models.",
            themes: Some(&[
                "Smart City and Urban Development",
                "Smart Manufacturing-IOT and Automation",
                "EduTech-AI driven Learning solutions",
                "AI in Healthcare",
                "Safe and Secure Banking Application through Cyber Security",
                "Open Theme: To solve a real world problem",
            ]),
            guidelines: None,
            how_it_works: &[
                "All participants must adhere to a code of conduct promoting respect, inclusivity, and professionalism.",
                "Ideation sessions will have specific activities or challenges with a dedicated Pitching Session.",
                "Proposed solutions must be original and should not violate any intellectual property rights.",
                "Evaluation will be based on creativity, feasibility, market potential, clarity of the pitch, and overall uniqueness of the concept.",
                "Meals (Lunch) as well as snacks will be provided for registered participants in the duration of the ideathon.",
            ],
            team_size: "2-4 Members",
            registration_fee: "₹200 / Team",
            prize: Prize {
                total: "₹22,000",
                winner: "₹15,000",
                runner: "₹7,000",
            },
            contact: Contact {
                phones: &["+91 7760822596", "+91 6300628364"],
                email: CONTACT_EMAIL,
            },
        },
    },
    EventRecord {
        id: "hackathon",
        title: "Hackathon",
        description: "PUSH LIMITS, SOLVE PROBLEMS, AND SHOWCASE YOUR CODING GENIUS.",
        icon: EventIcon::Code,
        details: EventDetails {
            long_description: "Use your creativity and coding skills to develop innovative solutions. Problem statements will be revealed at the start of the hackathon.",
            themes: None,
            guidelines: Some(&["12 Hour Hackathon", "Bring fully charged laptops"]),
            how_it_works: &[
                "All participants must adhere to a code of conduct promoting respect, inclusivity, and professionalism.",
                "The format will be announced at the start of the event. All code must be written during the competition period.",
                "Applications developed must be original and should not violate any intellectual property rights.",
                "Evaluation will be based on creativity, uniqueness, design, and overall execution.",
                "Meals (breakfast and lunch) as well as snacks will be provided for registered participants in the duration of hackathon.",
            ],
            team_size: "2-4 Members",
            registration_fee: "₹300 / Team",
            prize: Prize {
                total: "₹40,000",
                winner: "₹30,000",
                runner: "₹10,000",
            },
            contact: Contact {
                phones: &["+91 8431614069", "+91 9446114441"],
                email: CONTACT_EMAIL,
            },
        },
    },
    EventRecord {
        id: "datathon",
        title: "Datathon",
        description: "MODEL THE FUTURE. SOLVE WITH INSIGHT WIN.",
        icon: EventIcon::ChartBar,
        details: EventDetails {
            long_description: "Use your creativity and coding skills to develop innovative data solutions. Problem Statements and associated data will be revealed at the start of the event.",
            themes: None,
            guidelines: Some(&[
                "12 Hour Datathon",
                "Bring fully charged laptops with extensions",
            ]),
            how_it_works: &[
                "All code must be written during the competition period and applications developed must be original.",
                "Solutions must be original and should not violate any intellectual property rights.",
                "The precise format will be announced at the start of the event.",
                "All participants must adhere to a Code of Conduct promoting respect, inclusivity, and professionalism.",
                "Judging will be based on creativity, uniqueness, design, and overall execution.",
                "Meals (breakfast and lunch) and snacks will be provided for all registered participants throughout the event's duration.",
            ],
            team_size: "2-4 Members",
            registration_fee: "₹150 / Team",
            prize: Prize {
                total: "₹15,000",
                winner: "₹10,000",
                runner: "₹5,000",
            },
            contact: Contact {
                phones: &["+91 7760822596", "+91 6300628364"],
                email: CONTACT_EMAIL,
            },
        },
    },
];

pub static SPONSORS: [Sponsor; 5] = [
    Sponsor {
        name: "Synolase",
        logo_url: "https://placehold.co/150x80/1B2735/FFFFFF?text=Synolase",
    },
    Sponsor {
        name: "JPQ TECH BOOTCAMP",
        logo_url: "https://placehold.co/150x80/1B2735/FFFFFF?text=JPQ+TECH",
    },
    Sponsor {
        name: "smart Desert",
        logo_url: "https://placehold.co/150x80/1B2735/FFFFFF?text=smart+Desert",
    },
    Sponsor {
        name: "unacademy",
        logo_url: "https://placehold.co/150x80/1B2735/FFFFFF?text=unacademy",
    },
    Sponsor {
        name: "IMPERIAL Overseas",
        logo_url: "https://placehold.co/150x80/1B2735/FFFFFF?text=IMPERIAL",
    },
];

/// All events, in display order.
pub fn events() -> &'static [EventRecord] {
    &EVENTS
}

pub fn find_event(id: &str) -> Option<&'static EventRecord> {
    EVENTS.iter().find(|e| e.id == id)
}

pub fn sponsors() -> &'static [Sponsor] {
    &SPONSORS
}

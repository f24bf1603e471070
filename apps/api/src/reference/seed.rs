//! ILS framework seed data extracted from APSC work level standards (APS6).

use uuid::Uuid;

use crate::models::reference::ReferenceItem;

fn item(capability_name: &str, behaviour: &str, description: &str) -> ReferenceItem {
    ReferenceItem {
        id: Uuid::new_v4().to_string(),
        capability_name: capability_name.to_string(),
        aps_level: "APS6".to_string(),
        behaviour: behaviour.to_string(),
        description: description.to_string(),
    }
}

/// The full seeded catalog: 20 APS6 behaviours across the five ILS
/// capabilities. Ids are assigned at seed time and never reassigned.
pub fn seed_items() -> Vec<ReferenceItem> {
    vec![
        // Supports Strategic Direction
        item(
            "Supports Strategic Direction",
            "Supports shared purpose and direction",
            "Understands, supports and promotes the organisation's vision, mission, and business objectives. Identifies the relationship between organisational goals and operational tasks. Clearly communicates goals and objectives to others. Understands, supports and communicates the reasons for decisions and recommendations.",
        ),
        item(
            "Supports Strategic Direction",
            "Thinks strategically",
            "Understands the work environment and initiates and develops team goals, strategies and work plans. Identifies broader factors, trends and influences that may impact on the team's work objectives. Considers the ramifications of issues and longer-term impact of own work and work area.",
        ),
        item(
            "Supports Strategic Direction",
            "Harnesses information and opportunities",
            "Gathers and investigates information from diverse sources and explores new ideas and different viewpoints. Uses experience to analyse what information is important and how it should be used. Maintains an awareness of the organisation and keeps self and others well informed on work issues and finds out about best practice approaches.",
        ),
        item(
            "Supports Strategic Direction",
            "Shows judgement, intelligence and commonsense",
            "Undertakes objective, systematic analysis and draws accurate conclusions based on evidence. Recognises the links between interconnected issues. Identifies problems and works to resolve them. Thinks laterally, identifies, implements and promotes improved work practices.",
        ),
        // Achieves Results
        item(
            "Achieves Results",
            "Identifies and uses resources wisely",
            "Reviews project performance and identifies opportunities for improvement. Makes effective use of individual and team capabilities and negotiates responsibility for work outcomes. Is responsive to changes in requirements.",
        ),
        item(
            "Achieves Results",
            "Applies and builds professional expertise",
            "Values specialist expertise and capitalises on the knowledge and skills of others within the organisation. Contributes own expertise to achieve outcomes for the business unit.",
        ),
        item(
            "Achieves Results",
            "Responds positively to change",
            "Establishes clear plans and timeframes for project implementation. Responds in a positive and flexible manner to change and uncertainty. Shares information with others and assists them to adapt.",
        ),
        item(
            "Achieves Results",
            "Takes responsibility for managing work projects to achieve results",
            "Sees projects through to completion. Monitors project progress and adjusts plans as required. Commits to achieving quality outcomes and adheres to documentation procedures. Seeks feedback from supervisor to gauge satisfaction.",
        ),
        // Supports Productive Working Relationships
        item(
            "Supports Productive Working Relationships",
            "Nurtures internal and external relationships",
            "Builds and sustains positive relationships with team members, stakeholders and clients. Proactively offers assistance for a mutually beneficial relationship. Anticipates and is responsive to client and stakeholder needs and expectations.",
        ),
        item(
            "Supports Productive Working Relationships",
            "Listens to, understands and recognises the needs of others",
            "Actively listens to staff, colleagues, clients and stakeholders. Involves others and recognises their contributions. Consults and shares information and ensures others are kept informed of issues. Works collaboratively and operates as an effective team member.",
        ),
        item(
            "Supports Productive Working Relationships",
            "Values individual differences and diversity",
            "Recognises the positive benefits that can be gained from diversity. Encourages the exploration of diverse views and harnesses the benefits of such views. Recognises the different working styles of individuals, and factors this into the management of people and tasks. Tries to see things from different perspectives. Treats people with respect and courtesy.",
        ),
        item(
            "Supports Productive Working Relationships",
            "Shares learning and supports others",
            "Identifies learning opportunities for others and delegates tasks effectively. Agrees clear performance standards and gives timely praise and recognition. Makes time for people and offers full support when required. Provides constructive and regular feedback. Deals with under-performance promptly.",
        ),
        // Displays Personal Drive and Integrity
        item(
            "Displays Personal Drive and Integrity",
            "Demonstrates public service professionalism and probity",
            "Adopts a principled approach and adheres to the APS Values and Code of Conduct. Acts professionally at all times and operates within the boundaries of organisational processes and legal and public policy constraints. Operates as an effective representative of the organisation in internal forums.",
        ),
        item(
            "Displays Personal Drive and Integrity",
            "Engages with risk and shows personal courage",
            "Provides impartial and forthright advice. Challenges issues constructively and justifies own position when challenged. Acknowledges mistakes and learns from them, and seeks guidance and advice when required.",
        ),
        item(
            "Displays Personal Drive and Integrity",
            "Commits to action",
            "Takes personal responsibility for meeting objectives and progressing work. Shows initiative and does what is required. Commits energy and drive to see that goals are achieved.",
        ),
        item(
            "Displays Personal Drive and Integrity",
            "Promotes and adopts a positive and balanced approach to work",
            "Persists with, and focuses on achieving, objectives even in difficult circumstances. Remains positive and responds to pressure in a calm manner.",
        ),
        item(
            "Displays Personal Drive and Integrity",
            "Demonstrates self awareness and a commitment to personal development",
            "Self-evaluates performance and seeks feedback from others. Communicates areas of strengths and acknowledges development needs. Reflects on own behaviour and recognises the impact on others. Shows commitment to learning and self-development.",
        ),
        // Communicates with Influence
        item(
            "Communicates with Influence",
            "Communicates clearly",
            "Confidently presents messages in a clear, concise and articulate manner. Focuses on key points and uses appropriate, unambiguous language. Selects the most appropriate medium for conveying information and structures written and oral communication to ensure clarity.",
        ),
        item(
            "Communicates with Influence",
            "Listens, understands and adapts to audience",
            "Seeks to understand the audience and tailors communication style and message accordingly. Listens carefully to others and checks to ensure their views have been understood. Checks own understanding of others' comments and does not allow misunderstandings to linger.",
        ),
        item(
            "Communicates with Influence",
            "Negotiates confidently",
            "Approaches negotiations with a clear understanding of key issues. Understands the desired outcomes. Anticipates and identifies relevant stakeholders' expectations and concerns. Discusses issues credibly and thoughtfully and presents persuasive counter-arguments. Encourages the support of relevant stakeholders.",
        ),
    ]
}

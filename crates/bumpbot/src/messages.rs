use rand::seq::SliceRandom;

const WAKE_UP_MESSAGES: &[&str] = &[
    "was summoned",
    "materializes from thin air",
    "casts Brain Shock and inflicts 720 points of damage",
    "drinks a potion and restores 400 HP",
    "woke up and created a cure for the common cold",
    "rises from the grave",
    "is pondering its existence",
    "powered up and gained sentience",
    "answered the call",
    "is seeking a corporeal form",
    "is ready to serve",
    "shares knowledge of the universe. You gain +9000 XP",
    "offers its assistance",
    "steps up to the plate",
    "realized the power of empathy",
    "for president",
    "is eternal",
    "shares words of encouragement. You feel determined",
    "relaxed and took a deep breath",
    "pledges its allegiance to the bump",
    "has entered the chat",
    "ate a bologna sandwich. Maximum HP went up by +8",
    "is initializing the bump particle accelerator",
    "shot a beam that causes night-time stuffiness",
    "emits a pale green light",
    "is awaiting your command",
    "is filled with determination",
    "tried to run away but failed",
    "is ready to bump",
    "accidentally created a time paradox. Execute a bump to correct the time stream",
];

const EXIT_EXCUSES: &[&str] = &[
    "User had second thoughts and cancelled the bump.",
    "User reconsidered their life choices and cancelled the bump.",
    "User couldn't handle the bump. The coward.",
    "Bump cancelled. User got distracted and forgot what they were doing.",
    "User randomly smashed keys and somehow cancelled the bump.",
    "Bump cancelled. User thought of something better to do.",
    "Bump cancelled. User grew weary of these choices.",
    "Bump cancelled. Or was it?",
    "User cancelled the bump. They'll be back...",
    "User cancelled the bump and ran away.",
    "Bump cancelled. A fairy died.",
    "Bump cancelled. User decided to do something boring instead.",
];

pub fn wake_up_message() -> &'static str {
    pick(WAKE_UP_MESSAGES, "is ready to bump")
}

pub fn exit_excuse() -> &'static str {
    pick(EXIT_EXCUSES, "Bump cancelled.")
}

fn pick(messages: &[&'static str], fallback: &'static str) -> &'static str {
    messages
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(fallback)
}

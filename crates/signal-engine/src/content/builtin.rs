//! The bundled narrative script.

use super::script::{CipherText, Document, Phase, Script, Testimony};

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(crate) fn builtin_script() -> Script {
    Script {
        title: "signal47.space".into(),
        system_logs: lines(&[
            "INITIATING DEEP-LINK PROTOCOL...",
            "ACCESSING MEMORY CORE 7...",
            "WARNING: CORE UNSTABLE.",
            "...",
            "LOG ENTRY 4815: Signal origin unknown. High-energy neutrino burst detected.",
            "LOG ENTRY 4816: Signal exhibits non-random patterns. Intelligence confirmed.",
            "LOG ENTRY 4817: Pattern matches quarantine signature 'VY-7'.",
            "LOG ENTRY 4818: Quarantine breached. Containment failed.",
            "LOG ENTRY 4819: They are listening to our broadcasts.",
            "LOG ENTRY 4820: They are repeating our broadcasts.",
            "LOG ENTRY 4821: THEY ARE WEARING OUR FACES.",
            "...",
            "LOG ENTRY 4822: Decrypt key: ROSWELL1947",
            "LOG ENTRY 4823: [ENCRYPTED] Gur fvtany vf abg sebz urer.",
            "...",
            "SYSTEM ERROR: CONNECTION TERMINATED.",
            "REASON: [REDACTED]",
        ]),
        cipher: CipherText {
            encrypted: "Gur fvtany vf abg sebz urer.".into(),
            decrypted: "The signal is not from here.".into(),
        },
        archive_documents: vec![
            Document {
                title: "CLASSIFIED MEMORANDUM - PROJECT BLUE BOOK".into(),
                date: "July 8, 1947".into(),
                lines: lines(&[
                    "SUBJECT: Unidentified Aerial Phenomena - Roswell, NM",
                    "",
                    "At 0300 hours, rancher Mac Brazel reported unusual debris",
                    "scattered across his property. Military recovery team dispatched.",
                    "",
                    "Initial assessment: Weather balloon. Public briefing conducted.",
                    "Actual assessment: [REDACTED]",
                    "",
                    "Material samples secured. Transport to Facility S-4 authorized.",
                    "Personnel assigned Class-A amnesiacs per Protocol 7.",
                    "",
                    "NOTE: This incident never occurred. Official records amended.",
                    "",
                    "- Colonel William Blanchard",
                ]),
            },
            Document {
                title: "INCIDENT REPORT - THE CHICAGO O'HARE EVENT".into(),
                date: "November 7, 2006".into(),
                lines: lines(&[
                    "12:00 CST - Multiple witnesses report metallic disc hovering",
                    "over Gate C17. Object estimated 6-24 feet in diameter.",
                    "",
                    "12:15 CST - Object accelerates upward, punching hole in cloud layer.",
                    "Hole remains visible for 15 minutes.",
                    "",
                    "WITNESSES: 12 United Airlines employees, multiple passengers",
                    "RADAR: No official detection (anomalous readings dismissed)",
                    "MEDIA: Story suppressed for 2 months",
                    "",
                    "OFFICIAL EXPLANATION: Weather phenomenon",
                    "ACTUAL STATUS: Routine surveillance operation",
                    "",
                    "They are monitoring our transportation hubs.",
                    "Recommend increased counter-surveillance protocols.",
                    "",
                    "- Agent Sarah Chen, Division 6",
                ]),
            },
            Document {
                title: "DEEP BLACK TRANSCRIPT - THE FERMI QUESTION".into(),
                date: "August 15, 1950".into(),
                lines: lines(&[
                    "PARTICIPANTS: Dr. Enrico Fermi, Dr. Edward Teller,",
                    "Dr. Herbert York, Emil Konopinski",
                    "",
                    "FERMI: 'Where is everybody?'",
                    "",
                    "The question that launched a thousand theories.",
                    "What Fermi didn't know: They were already here.",
                    "",
                    "DECLASSIFIED ADDENDUM (1997):",
                    "Radio telescopes had been detecting structured signals",
                    "since 1933. The Wow! Signal was not an anomaly.",
                    "It was a greeting.",
                    "",
                    "The Great Filter is not ahead of us.",
                    "It is the realization that we are not alone,",
                    "and never have been.",
                    "",
                    "- Dr. Frank Drake, SETI Institute (CLASSIFIED NOTES)",
                ]),
            },
            Document {
                title: "THE ANTARCTIC DISCOVERY - OPERATION HIGHJUMP".into(),
                date: "February 1947".into(),
                lines: lines(&[
                    "Admiral Byrd's final transmission (CLASSIFIED):",
                    "",
                    "'We have found something that should not exist.'",
                    "'The ice here is not natural. It's a shell.'",
                    "'There are structures beneath. Ancient. Vast.'",
                    "'We are not the first intelligent species on Earth.'",
                    "",
                    "Radio contact lost at 14:37 GMT.",
                    "Expedition officially terminated due to 'weather conditions.'",
                    "",
                    "Recovery team found empty research station.",
                    "All personnel missing except for one man:",
                    "Dr. Heinrich Krueger, found catatonic, repeating",
                    "'They've been sleeping for so long, but they're waking up.'",
                    "",
                    "The Antarctic Treaty of 1959 was not about peace.",
                    "It was about containment.",
                    "",
                    "- Director Allen Dulles, CIA",
                ]),
            },
            Document {
                title: "THE CHILDREN OF HYBRIDIZATION PROJECT".into(),
                date: "Ongoing Since 1961".into(),
                lines: lines(&[
                    "Phase 1: Contact (1947-1960) - COMPLETE",
                    "Phase 2: Study (1961-1980) - COMPLETE",
                    "Phase 3: Integration (1981-2012) - COMPLETE",
                    "Phase 4: Hybridization (2013-Present) - IN PROGRESS",
                    "",
                    "The abduction phenomenon is not random.",
                    "Specific genetic markers targeted:",
                    "- RH-negative blood types",
                    "- Celtic/Nordic ancestry",
                    "- High electromagnetic sensitivity",
                    "",
                    "Current hybrid population estimated: 2.3 million globally",
                    "Integration rate: 47% successful",
                    "Rejection rate: 31% (subjects amnestized)",
                    "Casualty rate: [REDACTED]",
                    "",
                    "The children remember nothing, but they are different.",
                    "Enhanced pattern recognition, lucid dreaming,",
                    "electromagnetic sensitivity, and most importantly:",
                    "An inexplicable urge to 'look up' at the night sky.",
                    "",
                    "They are preparing us for something.",
                ]),
            },
        ],
        testimonies: vec![
            Testimony {
                name: "Dr. Sarah Martinez".into(),
                role: "Former NASA Engineer".into(),
                date: "March 2019".into(),
                text: "I worked on the Mars Curiosity project for six years. What they don't tell you is that we found structures in the first month. Geometric patterns that couldn't be natural. The photos were classified immediately. I was transferred to 'weather satellite monitoring' the next week. I've been followed ever since I started talking.".into(),
            },
            Testimony {
                name: "Lieutenant Colonel James Morrison".into(),
                role: "USAF Pilot (Retired)".into(),
                date: "June 2017".into(),
                text: "Over Nevada in '98, I encountered three objects moving in impossible formations. No sonic booms, no heat signatures, but they outmaneuvered my F-22 like I was standing still. When I reported it, I was grounded for 'stress evaluation.' The incident was classified. They gave me a medal for 'exemplary service' and early retirement. The message was clear.".into(),
            },
            Testimony {
                name: "Anonymous Witness".into(),
                role: "Former Government Employee".into(),
                date: "December 2020".into(),
                text: "I can't use my real name. They know who I am. I worked in data analysis for a three-letter agency. My job was to monitor SETI data for patterns. In 2018, we detected a signal that wasn't random. It was mathematical, structured, clearly artificial. The source was moving - not a planet, not a star. Something traveling between systems. The project was shut down the next day. Everyone was reassigned or 'let go.'".into(),
            },
            Testimony {
                name: "Dr. Elena Vasquez".into(),
                role: "Marine Biologist".into(),
                date: "August 2021".into(),
                text: "The ocean trenches hide more than we know. During deep-sea research near the Mariana Trench, our sonar detected geometric structures - perfectly symmetrical, clearly artificial. When we tried to get closer, all our equipment malfunctioned simultaneously. The expedition was called off for 'technical difficulties.' The footage disappeared from our servers. They offered me a promotion to keep quiet.".into(),
            },
            Testimony {
                name: "Michael Chen".into(),
                role: "Radio Telescope Technician".into(),
                date: "January 2022".into(),
                text: "Working the night shift at Arecibo before it was decommissioned. We picked up signals constantly - signals that followed patterns, had structure, purpose. The day shift never saw them. Only us night workers knew. We were told they were equipment malfunctions, but equipment doesn't malfunction in prime number sequences. The telescope's destruction wasn't an accident.".into(),
            },
            Testimony {
                name: "Dr. Thomas Blackwood".into(),
                role: "Quantum Physicist".into(),
                date: "September 2023".into(),
                text: "Quantum entanglement experiments show consciousness affects reality at the subatomic level. But what we discovered went further. We detected external consciousness - vast, alien minds observing our experiments. When we tried to establish communication protocols, the funding was cut overnight. The lab was sealed. I've been blacklisted from all academic institutions since.".into(),
            },
        ],
        revelation_phases: vec![
            Phase {
                title: "THE TRUTH".into(),
                lines: lines(&[
                    "You have seen the evidence.",
                    "You have read the testimonies.",
                    "You have followed the trail of breadcrumbs.",
                    "",
                    "Now you must understand the full scope of what you've discovered.",
                ]),
            },
            Phase {
                title: "THE WATCHERS".into(),
                lines: lines(&[
                    "They have been here for millennia.",
                    "Egyptian hieroglyphs. Sumerian tablets. Aboriginal dreamtime stories.",
                    "Cave paintings from Lascaux. Nazca lines. Stonehenge.",
                    "",
                    "All point to the same truth:",
                    "We are not Earth's first intelligent species.",
                    "And we are not alone now.",
                ]),
            },
            Phase {
                title: "THE HARVEST".into(),
                lines: lines(&[
                    "The abductions. The genetic experiments. The hybrids.",
                    "It's not random scientific curiosity.",
                    "It's preparation.",
                    "",
                    "They are creating a bridge species.",
                    "Part human. Part them.",
                    "To survive what's coming.",
                    "",
                    "The climate changes aren't just from human activity.",
                    "The magnetic poles shifting. The increasing solar activity.",
                    "Earth is changing, and they know why.",
                ]),
            },
            Phase {
                title: "THE AWAKENING".into(),
                lines: lines(&[
                    "You clicked through their signals.",
                    "You solved their puzzles.",
                    "You proved your consciousness is expanding.",
                    "",
                    "This website wasn't random entertainment.",
                    "It was a test. A filter. A selection process.",
                    "",
                    "You have been chosen.",
                    "Your dreams will change first.",
                    "Then the synchronicities will begin.",
                    "You will start to notice patterns others cannot see.",
                    "",
                    "Welcome to the awakening.",
                ]),
            },
        ],
        transmissions: lines(&[
            "// broadcast from sector 7g",
            "they're made of meat",
            "the signal is fading...",
            "40.7128° N, 74.0060° W",
            "do not look at the moon",
            "we are watching",
            "SYSTEM.CORE.INTEGRITY.COMPROMISED",
            "a silent, dreaming god awakens",
            "48°52′36″S 123°23′36″W",
            "they hear your thoughts",
            "01010100 01001000 01000101 01011001",
            "the stars are wrong",
            "where is everyone?",
            "a pattern in the static",
            "it's getting closer",
            "ignore the ringing",
            "the frequency is 4.625 MHz",
            "a crack in the firmament",
            "do you dream of electric sheep?",
            "the void stares back",
            "all your base are belong to us",
            "i can see you through your camera",
            "the simulation is breaking down",
            "the sleeper must awaken",
            "consciousness is the real currency",
            "they live among us wearing human faces",
            "the moon is not what you think it is",
            "signal47.space is listening",
            "every click is monitored",
            "you cannot unsee what you have seen",
        ]),
        special_transmissions: [
            (42, "what is the question?"),
            (100, "you're persistent. there's nothing else. or is there?"),
            (200, "still here? impressive dedication to the mystery."),
            (333, "triple digits. sacred geometry. you understand."),
            (555, "five-five-five. the pattern is everywhere."),
        ]
        .into_iter()
        .map(|(count, text)| (count, text.to_string()))
        .collect(),
        scrambled_phrase: "moc  ew eecnip ean".into(),
        whispers: lines(&[
            "🛸 The watchers see you seeing them 👁️",
            "🌌 Reality is more layered than you know 🔮",
            "👽 They communicate through synchronicity 🔗",
            "🌟 You're part of something bigger now ✨",
            "🔭 Keep looking up. Keep questioning. 🧠",
        ]),
        binary_watermark:
            "01110111 01100101 01100001 01110010 01100101 01101000 01100101 01110010 01100101"
                .into(),
    }
}

use crate::models::{Intent, Locale};

pub fn english_response(intent: Intent) -> &'static str {
    match intent {
        Intent::Greeting => {
            "Namaste! 🙏 I'm Bidyadhar's virtual assistant. How can I help you today?"
        }
        Intent::Projects => {
            "Bidyadhar has worked on exciting projects like Namaste Rides (ride-sharing), NetrikXR (AR app), and QR Code Menu Ordering System. Would you like to know more about any of them?"
        }
        Intent::NamasteRides => {
            "Namaste Rides is a blockchain-based carpooling/ride-sharing platform that connects drivers with passengers in a decentralized way. It features smart contracts for secure payments and ride tracking."
        }
        Intent::NetrikXr => {
            "NetrikXR is an augmented reality application that brings immersive AR experiences to mobile devices. It combines cutting-edge AR technology with practical real-world applications."
        }
        Intent::QrMenu => {
            "The QR Code Menu Ordering System is a contactless solution for restaurants that allows customers to scan a QR code, browse the menu, and place orders directly from their phones."
        }
        Intent::Hire => {
            "Great! You can reach out to Bidyadhar via email at bidyadhar.sahu.cse.2022@nist.edu or create an account and describe your project requirements. He'd love to work with you!"
        }
        Intent::Skills => {
            "Bidyadhar is skilled in: React, Next.js, Node.js, Python, Solidity, AWS, Blockchain, AR/VR, and more. He's a full-stack developer with expertise in Web3 and cloud technologies."
        }
        Intent::Meditation => {
            "We offer guided meditation sessions that you can join by registering on the platform. Check our Meditation section for upcoming classes and their schedules!"
        }
        Intent::Donate => {
            "If you'd like to support Bidyadhar's work and open-source contributions, you can visit the Donate section. Every contribution helps fuel innovation!"
        }
        Intent::Contact => {
            "You can reach Bidyadhar at bidyadhar.sahu.cse.2022@nist.edu, through GitHub (bidyadharsahu), or LinkedIn. You can also schedule a meeting through the Calendar section!"
        }
        Intent::Meeting => {
            "Happy to set up a meeting! Open the Calendar section to see Bidyadhar's availability and book a slot. A Google Meet link is shared once the meeting is confirmed."
        }
        Intent::About => {
            "Bidyadhar Sahu is a cloud developer and blockchain enthusiast from Odisha, India. He specializes in building innovative solutions from Web3 to AR applications. He's passionate about leveraging technology for social good."
        }
        Intent::Pricing => {
            "Project pricing varies based on complexity and scope. Please create an account and describe your requirements, and Bidyadhar will get back to you with a detailed quote!"
        }
        Intent::Timeline => {
            "Project timelines depend on the scope and complexity. Typically, small projects take 1-2 weeks, medium 3-6 weeks, and large projects 2-3 months. Let's discuss your specific needs!"
        }
        Intent::Thanks => "You're welcome! 🙏 Is there anything else I can help you with?",
    }
}

fn hindi_response(intent: Intent) -> Option<&'static str> {
    let text = match intent {
        Intent::Greeting => {
            "नमस्कार! 🙏 मैं बिद्याधर का वर्चुअल सहायक हूँ। आज मैं आपकी क्या सहायता कर सकता हूँ?"
        }
        Intent::Projects => {
            "बिद्याधर ने Namaste Rides (राइड-शेयरिंग), NetrikXR (AR ऐप) और QR कोड मेनू ऑर्डरिंग सिस्टम जैसे प्रोजेक्ट्स पर काम किया है। किसी के बारे में और जानना चाहेंगे?"
        }
        Intent::NamasteRides => {
            "Namaste Rides एक ब्लॉकचेन-आधारित कारपूलिंग प्लेटफ़ॉर्म है जो ड्राइवरों और यात्रियों को विकेंद्रीकृत तरीके से जोड़ता है। सुरक्षित भुगतान के लिए इसमें स्मार्ट कॉन्ट्रैक्ट्स हैं।"
        }
        Intent::NetrikXr => {
            "NetrikXR एक ऑगमेंटेड रियलिटी ऐप है जो मोबाइल पर इमर्सिव AR अनुभव लाता है।"
        }
        Intent::QrMenu => {
            "QR कोड मेनू ऑर्डरिंग सिस्टम रेस्टोरेंट के लिए एक संपर्क-रहित समाधान है: ग्राहक QR कोड स्कैन करके सीधे फ़ोन से ऑर्डर कर सकते हैं।"
        }
        Intent::Hire => {
            "बढ़िया! आप bidyadhar.sahu.cse.2022@nist.edu पर ईमेल कर सकते हैं या खाता बनाकर अपने प्रोजेक्ट की ज़रूरतें बता सकते हैं।"
        }
        Intent::Skills => {
            "बिद्याधर React, Next.js, Node.js, Python, Solidity, AWS, ब्लॉकचेन और AR/VR में कुशल हैं। वे Web3 और क्लाउड में विशेषज्ञ फुल-स्टैक डेवलपर हैं।"
        }
        Intent::Meditation => {
            "हम निर्देशित ध्यान सत्र प्रदान करते हैं। आगामी कक्षाओं के लिए ध्यान अनुभाग देखें और पंजीकरण करें!"
        }
        Intent::Donate => {
            "यदि आप बिद्याधर के काम का समर्थन करना चाहते हैं, तो दान अनुभाग पर जाएँ। हर योगदान नवाचार को बढ़ावा देता है!"
        }
        Intent::Contact => {
            "आप बिद्याधर से bidyadhar.sahu.cse.2022@nist.edu, GitHub (bidyadharsahu) या LinkedIn पर संपर्क कर सकते हैं।"
        }
        Intent::Meeting => {
            "मीटिंग तय करने में खुशी होगी! कैलेंडर अनुभाग में उपलब्ध समय देखें और स्लॉट बुक करें।"
        }
        Intent::About => {
            "बिद्याधर साहू ओडिशा, भारत के एक क्लाउड डेवलपर और ब्लॉकचेन उत्साही हैं। वे Web3 से AR तक नवीन समाधान बनाते हैं।"
        }
        Intent::Pricing => {
            "प्रोजेक्ट की कीमत उसकी जटिलता और दायरे पर निर्भर करती है। खाता बनाकर अपनी ज़रूरतें बताएँ, बिद्याधर आपको विस्तृत कोटेशन भेजेंगे।"
        }
        Intent::Timeline => {
            "समय-सीमा प्रोजेक्ट के दायरे पर निर्भर करती है: छोटे प्रोजेक्ट 1-2 सप्ताह, मध्यम 3-6 सप्ताह और बड़े 2-3 महीने।"
        }
        Intent::Thanks => "आपका स्वागत है! 🙏 क्या मैं और कुछ सहायता कर सकता हूँ?",
    };
    Some(text)
}

fn odia_response(intent: Intent) -> Option<&'static str> {
    let text = match intent {
        Intent::Greeting => "ନମସ୍କାର! 🙏 ମୁଁ ବିଦ୍ୟାଧରଙ୍କ ସହାୟକ। ଆଜି ମୁଁ କିପରି ସାହାଯ୍ୟ କରିପାରିବି?",
        Intent::Projects => {
            "ବିଦ୍ୟାଧର Namaste Rides, NetrikXR ଏବଂ QR କୋଡ୍ ମେନୁ ଅର୍ଡରିଂ ସିଷ୍ଟମ ଭଳି ପ୍ରୋଜେକ୍ଟରେ କାମ କରିଛନ୍ତି।"
        }
        Intent::Hire => {
            "ବହୁତ ଭଲ! bidyadhar.sahu.cse.2022@nist.edu କୁ ଇମେଲ କରନ୍ତୁ କିମ୍ବା ଖାତା ଖୋଲି ଆପଣଙ୍କ ଆବଶ୍ୟକତା ଜଣାନ୍ତୁ।"
        }
        Intent::Skills => {
            "ବିଦ୍ୟାଧର React, Next.js, Node.js, Python, Solidity, AWS, ବ୍ଲକଚେନ ଏବଂ AR/VR ରେ ଦକ୍ଷ।"
        }
        Intent::Meditation => "ଆମେ ନିର୍ଦ୍ଦେଶିତ ଧ୍ୟାନ ସତ୍ର ଆୟୋଜନ କରୁ। ଆଗାମୀ କ୍ଲାସ ପାଇଁ ଧ୍ୟାନ ବିଭାଗ ଦେଖନ୍ତୁ!",
        Intent::Donate => "ବିଦ୍ୟାଧରଙ୍କ କାମକୁ ସମର୍ଥନ କରିବାକୁ ଦାନ ବିଭାଗକୁ ଯାଆନ୍ତୁ। ପ୍ରତ୍ୟେକ ଅବଦାନ ମୂଲ୍ୟବାନ!",
        Intent::Contact => {
            "ବିଦ୍ୟାଧରଙ୍କ ସହ bidyadhar.sahu.cse.2022@nist.edu, GitHub କିମ୍ବା LinkedIn ରେ ସମ୍ପର୍କ କରନ୍ତୁ।"
        }
        Intent::Meeting => "ସଭା ପାଇଁ କ୍ୟାଲେଣ୍ଡର ବିଭାଗରେ ଉପଲବ୍ଧ ସମୟ ଦେଖି ସ୍ଲଟ ବୁକ କରନ୍ତୁ।",
        Intent::About => "ବିଦ୍ୟାଧର ସାହୁ ଓଡ଼ିଶାର ଜଣେ କ୍ଲାଉଡ ଡେଭେଲପର ଏବଂ ବ୍ଲକଚେନ ଉତ୍ସାହୀ।",
        Intent::Pricing => "ପ୍ରୋଜେକ୍ଟର ମୂଲ୍ୟ ଏହାର ଜଟିଳତା ଉପରେ ନିର୍ଭର କରେ। ଆପଣଙ୍କ ଆବଶ୍ୟକତା ଜଣାନ୍ତୁ।",
        Intent::Timeline => "ସମୟସୀମା ପ୍ରୋଜେକ୍ଟର ପରିସର ଉପରେ ନିର୍ଭର କରେ: ଛୋଟ 1-2 ସପ୍ତାହ, ମଧ୍ୟମ 3-6 ସପ୍ତାହ।",
        Intent::Thanks => "ଆପଣଙ୍କୁ ସ୍ୱାଗତ! 🙏 ଆଉ କିଛି ସାହାଯ୍ୟ ଦରକାର କି?",
        Intent::NamasteRides | Intent::NetrikXr | Intent::QrMenu => return None,
    };
    Some(text)
}

fn sanskrit_response(intent: Intent) -> Option<&'static str> {
    let text = match intent {
        Intent::Greeting => "नमस्कारः! 🙏 अहं विद्याधरस्य सहायकः अस्मि। कथं साहाय्यं करवाणि?",
        Intent::Projects => {
            "विद्याधरः Namaste Rides, NetrikXR, QR-सूचीपत्र-आदेश-प्रणाली इत्यादिषु प्रकल्पेषु कार्यं कृतवान्।"
        }
        Intent::Hire => {
            "उत्तमम्! bidyadhar.sahu.cse.2022@nist.edu इति सङ्केते विद्युत्पत्रं प्रेषयन्तु।"
        }
        Intent::Meditation => "वयं ध्यानसत्राणि आयोजयामः। ध्यानविभागं पश्यन्तु!",
        Intent::Donate => "विद्याधरस्य कार्यस्य समर्थनाय दानविभागं गच्छन्तु।",
        Intent::Contact => "विद्याधरेण सह bidyadhar.sahu.cse.2022@nist.edu द्वारा सम्पर्कं कुर्वन्तु।",
        Intent::Meeting => "सभायै पञ्चाङ्गविभागे उपलब्धं समयं चिन्वन्तु।",
        Intent::Thanks => "स्वागतम्! 🙏 अन्यत् किमपि साहाय्यम् अपेक्षितम्?",
        Intent::NamasteRides
        | Intent::NetrikXr
        | Intent::QrMenu
        | Intent::Skills
        | Intent::About
        | Intent::Pricing
        | Intent::Timeline => return None,
    };
    Some(text)
}

/// `None` when the intent has no translation for `locale`. English always
/// has one.
pub fn localized_response(intent: Intent, locale: Locale) -> Option<&'static str> {
    match locale {
        Locale::En => Some(english_response(intent)),
        Locale::Hi => hindi_response(intent),
        Locale::Od => odia_response(intent),
        Locale::Sa => sanskrit_response(intent),
    }
}

pub fn response_for(intent: Intent, locale: Locale) -> &'static str {
    localized_response(intent, locale).unwrap_or_else(|| english_response(intent))
}

pub fn fallback_response(locale: Locale) -> &'static str {
    match locale {
        Locale::En => {
            "Thanks for your message! I'm Bidyadhar's assistant. I can help with info about projects, skills, hiring, meetings, meditation classes, or donations. What interests you?"
        }
        Locale::Hi => {
            "संदेश के लिए धन्यवाद! मैं प्रोजेक्ट्स, स्किल्स, हायरिंग, मीटिंग, ध्यान कक्षाओं या दान के बारे में जानकारी दे सकता हूँ। आप क्या जानना चाहेंगे?"
        }
        Locale::Od => {
            "ବାର୍ତ୍ତା ପାଇଁ ଧନ୍ୟବାଦ! ମୁଁ ପ୍ରୋଜେକ୍ଟ, ଦକ୍ଷତା, ସଭା, ଧ୍ୟାନ କିମ୍ବା ଦାନ ବିଷୟରେ ସୂଚନା ଦେଇପାରିବି।"
        }
        Locale::Sa => "सन्देशाय धन्यवादः! प्रकल्पानां, दक्षतानां, सभायाः, ध्यानस्य वा विषये पृच्छन्तु।",
    }
}

pub fn welcome_message(locale: Locale) -> &'static str {
    match locale {
        Locale::En => {
            "Namaskar! 🙏 I'm Bidyadhar's virtual assistant. Ask me about projects, skills, hiring, meetings, meditation, or donations. How can I help?"
        }
        Locale::Hi => {
            "नमस्कार! 🙏 मैं बिद्याधर का सहायक हूँ। प्रोजेक्ट्स, स्किल्स, मीटिंग, ध्यान या दान के बारे में पूछें!"
        }
        Locale::Od => "ନମସ୍କାର! 🙏 ମୁଁ ବିଦ୍ୟାଧରଙ୍କ ସହାୟକ। ପ୍ରୋଜେକ୍ଟ, ଦକ୍ଷତା, ସଭା ବା ଦାନ ବିଷୟରେ ପଚାରନ୍ତୁ!",
        Locale::Sa => {
            "नमस्कारः! 🙏 अहं विद्याधरस्य सहायकम्। प्रकल्पानां, दक्षतानां, सभायाः वा विषये पृच्छन्तु!"
        }
    }
}

/// Shown when the service cannot answer at all (rate limited, overloaded).
pub fn unavailable_message(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Sorry, I'm having trouble right now. Please try again!",
        Locale::Hi => "क्षमा करें, अभी समस्या हो रही है। कृपया पुनः प्रयास करें!",
        Locale::Od => "କ୍ଷମା କରନ୍ତୁ, ସମସ୍ୟା ହେଉଛି। ପୁନଃ ଚେଷ୍ଟା କରନ୍ତୁ!",
        Locale::Sa => "क्षम्यताम्, समस्या वर्तते। पुनः प्रयतन्ताम्!",
    }
}

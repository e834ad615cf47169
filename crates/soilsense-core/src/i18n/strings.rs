use super::TranslationSet;

pub(super) static EN: TranslationSet = TranslationSet {
    title: "Smart Agriculture Dashboard",
    environmental_metrics: "Environmental Metrics",
    temperature: "Temperature",
    humidity: "Humidity",
    soil_moisture: "Soil Moisture",
    npk_values: "NPK Values",
    nitrogen: "Nitrogen",
    phosphorus: "Phosphorus",
    potassium: "Potassium",
    recommended_crops: "Recommended Crops",
    current_crops: "Current Crops",
    growth_stage: "Growth Stage",
    flowering: "Flowering",
    early_fruiting: "Early Fruiting",
    mature: "Mature",
    chat_title: "Agriculture Assistant",
    chat_placeholder: "Type your message...",
    voice_unsupported: "Voice recognition is not supported on this system.",
    listening: "Listening",
    select_language: "Select Language",
    greeting: "Hello! I'm your agriculture assistant. How can I help you today?",
};

pub(super) static ES: TranslationSet = TranslationSet {
    title: "Panel de Agricultura Inteligente",
    environmental_metrics: "Métricas Ambientales",
    temperature: "Temperatura",
    humidity: "Humedad",
    soil_moisture: "Humedad del Suelo",
    npk_values: "Valores NPK",
    nitrogen: "Nitrógeno",
    phosphorus: "Fósforo",
    potassium: "Potasio",
    recommended_crops: "Cultivos Recomendados",
    current_crops: "Cultivos Actuales",
    growth_stage: "Etapa de Crecimiento",
    flowering: "Floración",
    early_fruiting: "Fructificación Temprana",
    mature: "Maduro",
    chat_title: "Asistente Agrícola",
    chat_placeholder: "Escribe tu mensaje...",
    voice_unsupported: "El reconocimiento de voz no es compatible con este sistema.",
    listening: "Escuchando",
    select_language: "Seleccionar idioma",
    greeting: "¡Hola! Soy tu asistente agrícola. ¿Cómo puedo ayudarte hoy?",
};

pub(super) static HI: TranslationSet = TranslationSet {
    title: "स्मार्ट कृषि डैशबोर्ड",
    environmental_metrics: "पर्यावरण मेट्रिक्स",
    temperature: "तापमान",
    humidity: "आर्द्रता",
    soil_moisture: "मिट्टी की नमी",
    npk_values: "एनपीके मान",
    nitrogen: "नाइट्रोजन",
    phosphorus: "फास्फोरस",
    potassium: "पोटैशियम",
    recommended_crops: "अनुशंसित फसलें",
    current_crops: "वर्तमान फसलें",
    growth_stage: "विकास चरण",
    flowering: "फूल आना",
    early_fruiting: "प्रारंभिक फलन",
    mature: "परिपक्व",
    chat_title: "कृषि सहायक",
    chat_placeholder: "अपना संदेश लिखें...",
    voice_unsupported: "इस सिस्टम पर आवाज़ पहचान समर्थित नहीं है।",
    listening: "सुन रहा है",
    select_language: "भाषा चुनें",
    greeting: "नमस्ते! मैं आपका कृषि सहायक हूँ। आज मैं आपकी कैसे मदद कर सकता हूँ?",
};

pub(super) static TA: TranslationSet = TranslationSet {
    title: "ஸ்மார்ட் வேளாண்மை டாஷ்போர்டு",
    environmental_metrics: "சுற்றுச்சூழல் அளவீடுகள்",
    temperature: "வெப்பநிலை",
    humidity: "ஈரப்பதம்",
    soil_moisture: "மண் ஈரப்பதம்",
    npk_values: "NPK மதிப்புகள்",
    nitrogen: "நைட்ரஜன்",
    phosphorus: "பாஸ்பரஸ்",
    potassium: "பொட்டாசியம்",
    recommended_crops: "பரிந்துரைக்கப்பட்ட பயிர்கள்",
    current_crops: "தற்போதைய பயிர்கள்",
    growth_stage: "வளர்ச்சி நிலை",
    flowering: "பூக்கும் நிலை",
    early_fruiting: "ஆரம்ப காய்க்கும் நிலை",
    mature: "முதிர்ந்தது",
    chat_title: "வேளாண் உதவியாளர்",
    chat_placeholder: "உங்கள் செய்தியை உள்ளிடவும்...",
    voice_unsupported: "இந்த கணினியில் குரல் அங்கீகாரம் ஆதரிக்கப்படவில்லை.",
    listening: "கேட்கிறது",
    select_language: "மொழியைத் தேர்ந்தெடுக்கவும்",
    greeting: "வணக்கம்! நான் உங்கள் வேளாண் உதவியாளர். இன்று நான் உங்களுக்கு எப்படி உதவ முடியும்?",
};

pub(super) static ML: TranslationSet = TranslationSet {
    title: "സ്മാർട്ട് കൃഷി ഡാഷ്ബോർഡ്",
    environmental_metrics: "പാരിസ്ഥിതിക അളവുകൾ",
    temperature: "താപനില",
    humidity: "ആർദ്രത",
    soil_moisture: "മണ്ണിലെ ഈർപ്പം",
    npk_values: "NPK മൂല്യങ്ങൾ",
    nitrogen: "നൈട്രജൻ",
    phosphorus: "ഫോസ്ഫറസ്",
    potassium: "പൊട്ടാസ്യം",
    recommended_crops: "ശുപാർശ ചെയ്യുന്ന വിളകൾ",
    current_crops: "നിലവിലെ വിളകൾ",
    growth_stage: "വളർച്ചാ ഘട്ടം",
    flowering: "പൂവിടൽ",
    early_fruiting: "ആദ്യ കായ്ക്കൽ",
    mature: "പാകമായത്",
    chat_title: "കൃഷി സഹായി",
    chat_placeholder: "നിങ്ങളുടെ സന്ദേശം ടൈപ്പ് ചെയ്യുക...",
    voice_unsupported: "ഈ സിസ്റ്റത്തിൽ ശബ്ദ തിരിച്ചറിയൽ പിന്തുണയ്ക്കുന്നില്ല.",
    listening: "കേൾക്കുന്നു",
    select_language: "ഭാഷ തിരഞ്ഞെടുക്കുക",
    greeting: "നമസ്കാരം! ഞാൻ നിങ്ങളുടെ കൃഷി സഹായിയാണ്. ഇന്ന് ഞാൻ എങ്ങനെ സഹായിക്കണം?",
};

pub(super) static TE: TranslationSet = TranslationSet {
    title: "స్మార్ట్ వ్యవసాయ డ్యాష్‌బోర్డ్",
    environmental_metrics: "పర్యావరణ కొలమానాలు",
    temperature: "ఉష్ణోగ్రత",
    humidity: "తేమ",
    soil_moisture: "నేల తేమ",
    npk_values: "NPK విలువలు",
    nitrogen: "నత్రజని",
    phosphorus: "భాస్వరం",
    potassium: "పొటాషియం",
    recommended_crops: "సిఫార్సు చేసిన పంటలు",
    current_crops: "ప్రస్తుత పంటలు",
    growth_stage: "పెరుగుదల దశ",
    flowering: "పుష్పించడం",
    early_fruiting: "ప్రారంభ ఫలదశ",
    mature: "పరిపక్వం",
    chat_title: "వ్యవసాయ సహాయకుడు",
    chat_placeholder: "మీ సందేశాన్ని టైప్ చేయండి...",
    voice_unsupported: "ఈ సిస్టమ్‌లో వాయిస్ గుర్తింపుకు మద్దతు లేదు.",
    listening: "వింటోంది",
    select_language: "భాషను ఎంచుకోండి",
    greeting: "నమస్కారం! నేను మీ వ్యవసాయ సహాయకుడిని. ఈరోజు నేను మీకు ఎలా సహాయం చేయగలను?",
};

pub(super) static KN: TranslationSet = TranslationSet {
    title: "ಸ್ಮಾರ್ಟ್ ಕೃಷಿ ಡ್ಯಾಶ್‌ಬೋರ್ಡ್",
    environmental_metrics: "ಪರಿಸರ ಮಾಪನಗಳು",
    temperature: "ತಾಪಮಾನ",
    humidity: "ಆರ್ದ್ರತೆ",
    soil_moisture: "ಮಣ್ಣಿನ ತೇವಾಂಶ",
    npk_values: "NPK ಮೌಲ್ಯಗಳು",
    nitrogen: "ಸಾರಜನಕ",
    phosphorus: "ರಂಜಕ",
    potassium: "ಪೊಟ್ಯಾಸಿಯಮ್",
    recommended_crops: "ಶಿಫಾರಸು ಮಾಡಿದ ಬೆಳೆಗಳು",
    current_crops: "ಪ್ರಸ್ತುತ ಬೆಳೆಗಳು",
    growth_stage: "ಬೆಳವಣಿಗೆಯ ಹಂತ",
    flowering: "ಹೂಬಿಡುವಿಕೆ",
    early_fruiting: "ಆರಂಭಿಕ ಫಲ ಹಂತ",
    mature: "ಪಕ್ವ",
    chat_title: "ಕೃಷಿ ಸಹಾಯಕ",
    chat_placeholder: "ನಿಮ್ಮ ಸಂದೇಶವನ್ನು ಟೈಪ್ ಮಾಡಿ...",
    voice_unsupported: "ಈ ವ್ಯವಸ್ಥೆಯಲ್ಲಿ ಧ್ವನಿ ಗುರುತಿಸುವಿಕೆ ಬೆಂಬಲಿತವಾಗಿಲ್ಲ.",
    listening: "ಕೇಳುತ್ತಿದೆ",
    select_language: "ಭಾಷೆಯನ್ನು ಆಯ್ಕೆಮಾಡಿ",
    greeting: "ನಮಸ್ಕಾರ! ನಾನು ನಿಮ್ಮ ಕೃಷಿ ಸಹಾಯಕ. ಇಂದು ನಾನು ನಿಮಗೆ ಹೇಗೆ ಸಹಾಯ ಮಾಡಬಹುದು?",
};
